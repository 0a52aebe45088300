use super::types::{Contest, Envelope, Problem, ProblemSet, Submission};
use crate::{config, error::Result};
use log::debug;
use regex::Regex;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

const FIREFOX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:78.0) Gecko/20100101 Firefox/78.0";
// Team/testing/special rounds are dropped from the contest map entirely.
const EXCLUDED_CONTESTS: &str = r"(?i)Teams Preferred|NERC|School Team Contest|Preferably Teams|teams allowed|Testing Round|Unknown Language Round|April Fools|Kotlin";

pub(super) struct RegexSet {
    excluded_contest: Regex,
}
impl RegexSet {
    pub(super) fn new() -> Self {
        RegexSet {
            excluded_contest: Regex::new(EXCLUDED_CONTESTS).unwrap(),
        }
    }
}

pub struct Session {
    client: Client,
    regex: RegexSet,
}
impl Session {
    pub fn new() -> Self {
        Session {
            client: Client::builder().user_agent(FIREFOX_UA).build().unwrap(),
            regex: RegexSet::new(),
        }
    }

    async fn get_api<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        let body = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .text()
            .await?;
        serde_json::from_str::<Envelope<T>>(body.as_str())?.into_result()
    }

    pub async fn problem_set(&self) -> Result<Vec<Problem>> {
        let set: ProblemSet = self.get_api(config::api::PROBLEM_SET, &[]).await?;
        debug!("loaded problem set: {} problems", set.problems.len());
        Ok(set.problems)
    }
    pub async fn contest_list(&self) -> Result<HashMap<u32, Contest>> {
        let list: Vec<Contest> = self.get_api(config::api::CONTEST_LIST, &[]).await?;
        let contests: HashMap<u32, Contest> = list
            .into_iter()
            .filter(|c| !self.regex.excluded_contest.is_match(c.name.as_str()))
            .map(|c| (c.id, c))
            .collect();
        debug!("loaded {} contests", contests.len());
        Ok(contests)
    }
    pub async fn user_status(&self, handle: &str) -> Result<Vec<Submission>> {
        let submissions: Vec<Submission> = self
            .get_api(config::api::USER_STATUS, &[("handle", handle)])
            .await?;
        debug!("loaded {} submissions of {}", submissions.len(), handle);
        Ok(submissions)
    }
}
impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RegexSet;

    #[test]
    fn team_and_special_rounds_are_excluded() {
        let regex = RegexSet::new().excluded_contest;
        assert!(regex.is_match("XYZ Teams Preferred Round"));
        assert!(regex.is_match("Testing Round 42"));
        assert!(regex.is_match("april fools day contest 2021"));
        assert!(regex.is_match("Kotlin Heroes: Episode 7"));
        assert!(regex.is_match("2020-2021 ICPC, NERC, Southern Subregional"));
        assert!(!regex.is_match("Codeforces Round #700 (Div. 2)"));
        assert!(!regex.is_match("Educational Codeforces Round 100"));
    }
}
