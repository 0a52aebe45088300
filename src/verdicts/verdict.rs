use crate::api::types::{Submission, Verdict};
use std::fmt;

/// Per-problem outcome derived from every submission against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Solved,
    Failed,
    Unattempted,
}
impl Symbol {
    pub fn glyph(self) -> char {
        match self {
            Symbol::Solved => '✔',
            Symbol::Failed => '✘',
            Symbol::Unattempted => '−',
        }
    }
}
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// One accepted submission makes the problem Solved no matter how many
/// attempts failed before or after it.
pub fn best_symbol(submissions: &[Submission]) -> Symbol {
    let mut failed = false;
    for submission in submissions {
        match submission.verdict {
            Some(Verdict::Ok) => return Symbol::Solved,
            Some(v) if v.is_failure() => failed = true,
            _ => {}
        }
    }
    if failed {
        Symbol::Failed
    } else {
        Symbol::Unattempted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Problem;

    fn sub(verdict: Option<Verdict>) -> Submission {
        Submission {
            problem: Problem {
                contest_id: 1,
                index: String::from("A"),
                rating: None,
            },
            verdict,
        }
    }

    #[test]
    fn any_accepted_wins() {
        let subs = vec![
            sub(Some(Verdict::WrongAnswer)),
            sub(Some(Verdict::TimeLimitExceeded)),
            sub(Some(Verdict::Ok)),
            sub(Some(Verdict::RuntimeError)),
        ];
        assert_eq!(best_symbol(&subs), Symbol::Solved);
    }

    #[test]
    fn failures_without_accept() {
        for v in [
            Verdict::CompilationError,
            Verdict::RuntimeError,
            Verdict::WrongAnswer,
            Verdict::TimeLimitExceeded,
        ] {
            assert_eq!(best_symbol(&[sub(Some(v))]), Symbol::Failed);
        }
    }

    #[test]
    fn empty_and_pending_are_unattempted() {
        assert_eq!(best_symbol(&[]), Symbol::Unattempted);
        assert_eq!(
            best_symbol(&[sub(Some(Verdict::Other)), sub(None)]),
            Symbol::Unattempted
        );
    }

    #[test]
    fn glyphs() {
        assert_eq!(Symbol::Solved.to_string(), "✔");
        assert_eq!(Symbol::Failed.to_string(), "✘");
        assert_eq!(Symbol::Unattempted.to_string(), "−");
    }
}
