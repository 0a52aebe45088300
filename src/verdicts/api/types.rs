use crate::error::{Error, Result};
use serde::Deserialize;

/// Envelope every Codeforces API endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Envelope<T> {
    pub status: Status,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub result: Option<T>,
}
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum Status {
    Ok,
    Failed,
}
impl<T> Envelope<T> {
    pub(crate) fn into_result(self) -> Result<T> {
        match self.status {
            Status::Ok => self
                .result
                .ok_or_else(|| Error::malformed("missing result field")),
            Status::Failed => Err(Error::rejected(self.comment)),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub contest_id: u32,
    pub index: String,
    #[serde(default)]
    pub rating: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Contest {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Submission {
    pub problem: Problem,
    #[serde(default)]
    pub verdict: Option<Verdict>,
}

/// Submission outcome. Anything outside the fixed set (pending, skipped,
/// hacked, ...) collapses to `Other`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Verdict {
    Ok,
    CompilationError,
    RuntimeError,
    WrongAnswer,
    TimeLimitExceeded,
    Other,
}
impl From<String> for Verdict {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "OK" => Verdict::Ok,
            "COMPILATION_ERROR" => Verdict::CompilationError,
            "RUNTIME_ERROR" => Verdict::RuntimeError,
            "WRONG_ANSWER" => Verdict::WrongAnswer,
            "TIME_LIMIT_EXCEEDED" => Verdict::TimeLimitExceeded,
            _ => Verdict::Other,
        }
    }
}
impl Verdict {
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            Verdict::CompilationError
                | Verdict::RuntimeError
                | Verdict::WrongAnswer
                | Verdict::TimeLimitExceeded
        )
    }
}

/// `problemset.problems` result body; statistics are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ProblemSet {
    pub problems: Vec<Problem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_envelope_is_reported() {
        let body = r#"{"status":"FAILED","comment":"handle: User with handle nosuch not found"}"#;
        let envelope: Envelope<Vec<Submission>> = serde_json::from_str(body).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert!(err.is_rejected());
        assert!(err.to_string().contains("nosuch"));
    }

    #[test]
    fn ok_envelope_without_result_is_malformed() {
        let body = r#"{"status":"OK"}"#;
        let envelope: Envelope<Vec<Contest>> = serde_json::from_str(body).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert!(!err.is_rejected());
    }

    #[test]
    fn submission_verdicts_parse() {
        let body = r#"[
            {"problem": {"contestId": 1500, "index": "A", "rating": 800}, "verdict": "WRONG_ANSWER"},
            {"problem": {"contestId": 1500, "index": "A", "rating": 800}, "verdict": "OK"},
            {"problem": {"contestId": 1500, "index": "B"}, "verdict": "TESTING"},
            {"problem": {"contestId": 1500, "index": "C"}}
        ]"#;
        let subs: Vec<Submission> = serde_json::from_str(body).unwrap();
        assert_eq!(subs[0].verdict, Some(Verdict::WrongAnswer));
        assert_eq!(subs[1].verdict, Some(Verdict::Ok));
        assert_eq!(subs[2].verdict, Some(Verdict::Other));
        assert_eq!(subs[3].verdict, None);
        assert_eq!(subs[3].problem.rating, None);
    }

    #[test]
    fn failure_set_is_exact() {
        assert!(Verdict::WrongAnswer.is_failure());
        assert!(Verdict::TimeLimitExceeded.is_failure());
        assert!(!Verdict::Ok.is_failure());
        assert!(!Verdict::Other.is_failure());
    }
}
