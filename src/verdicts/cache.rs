use crate::{
    api::{types::Problem, Session},
    error::Result,
};
use log::debug;
use std::collections::HashMap;

/// Session-wide memo owned by the caller. The problem catalog is fetched at
/// most once per session; problem letters are derived from it and cached per
/// contest id, never invalidated.
#[derive(Default)]
pub struct Cache {
    problem_set: Option<Vec<Problem>>,
    letters: HashMap<u32, Vec<String>>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }
    /// Start with a preloaded catalog (no network use afterwards).
    pub fn from_problem_set(problems: Vec<Problem>) -> Self {
        Cache {
            problem_set: Some(problems),
            letters: HashMap::new(),
        }
    }

    pub async fn ensure_problem_set(&mut self, session: &Session) -> Result<()> {
        if self.problem_set.is_none() {
            self.problem_set = Some(session.problem_set().await?);
        }
        Ok(())
    }

    /// Letters of one contest, ascending. Empty when the catalog knows
    /// nothing about the contest.
    pub fn problem_letters(&mut self, contest: u32) -> Vec<String> {
        if let Some(letters) = self.letters.get(&contest) {
            return letters.clone();
        }
        let mut letters: Vec<String> = self
            .problem_set
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|p| p.contest_id == contest)
            .map(|p| p.index.clone())
            .collect();
        letters.sort();
        debug!("contest {}: letters {:?}", contest, letters);
        self.letters.insert(contest, letters.clone());
        letters
    }

    pub fn problem_rating(&self, contest: u32, letter: &str) -> Option<u32> {
        self.problem_set
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|p| p.contest_id == contest && p.index == letter)
            .and_then(|p| p.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(contest: u32, index: &str, rating: Option<u32>) -> Problem {
        Problem {
            contest_id: contest,
            index: index.to_string(),
            rating,
        }
    }

    #[test]
    fn letters_are_sorted_and_cached() {
        let mut cache = Cache::from_problem_set(vec![
            problem(1500, "B", Some(1000)),
            problem(1500, "A", Some(800)),
            problem(1501, "A", None),
        ]);
        assert_eq!(cache.problem_letters(1500), vec!["A", "B"]);
        // Served from the per-contest cache the second time.
        assert_eq!(cache.problem_letters(1500), vec!["A", "B"]);
        assert!(cache.letters.contains_key(&1500));
        assert!(cache.problem_letters(9999).is_empty());
    }

    #[test]
    fn rating_lookup() {
        let cache = Cache::from_problem_set(vec![
            problem(1500, "A", Some(800)),
            problem(1500, "B", None),
        ]);
        assert_eq!(cache.problem_rating(1500, "A"), Some(800));
        assert_eq!(cache.problem_rating(1500, "B"), None);
        assert_eq!(cache.problem_rating(1500, "Z"), None);
    }
}
