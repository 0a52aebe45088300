use crate::api::types::Submission;
use std::collections::BTreeMap;

/// Contest id -> problem letter -> submissions in original order.
pub type Grouped = BTreeMap<u32, BTreeMap<String, Vec<Submission>>>;

pub fn by_round(submissions: Vec<Submission>) -> Grouped {
    let mut grouped = Grouped::new();
    for submission in submissions {
        grouped
            .entry(submission.problem.contest_id)
            .or_default()
            .entry(submission.problem.index.clone())
            .or_default()
            .push(submission);
    }
    grouped
}
