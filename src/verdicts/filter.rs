use crate::api::types::Contest;
use std::{collections::HashMap, str::FromStr};

/// Contest category selected by the user; matching is a substring test on
/// the contest name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    Div1,
    Div2,
    Div3,
    Div4,
    Div1And2,
    Educational,
    Global,
}

impl FromStr for Category {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => Category::All,
            "div1" => Category::Div1,
            "div2" => Category::Div2,
            "div3" => Category::Div3,
            "div4" => Category::Div4,
            "div1+2" => Category::Div1And2,
            "educational" => Category::Educational,
            "global" => Category::Global,
            unknown => return Err(format!("unknown filter {:?}", unknown)),
        })
    }
}

impl Category {
    pub fn matches(self, name: &str) -> bool {
        match self {
            Category::All => true,
            Category::Div1 => name.contains("Div. 1") && !name.contains("Div. 2"),
            Category::Div2 => {
                name.contains("Div. 2")
                    && !name.contains("Div. 1")
                    && !name.contains("Educational")
            }
            Category::Div3 => name.contains("Div. 3"),
            Category::Div4 => name.contains("Div. 4"),
            Category::Div1And2 => name.contains("Div. 1") && name.contains("Div. 2"),
            Category::Educational => name.contains("Educational"),
            Category::Global => name.contains("Global"),
        }
    }
}

/// Narrow `rounds` to the selected category. Ids missing from the contest
/// map pass through here; the renderer drops them.
pub fn filter_rounds(
    contests: &HashMap<u32, Contest>,
    rounds: &[u32],
    category: Category,
) -> Vec<u32> {
    if category == Category::All {
        return rounds.to_vec();
    }
    rounds
        .iter()
        .copied()
        .filter(|id| match contests.get(id) {
            Some(contest) => category.matches(contest.name.as_str()),
            None => true,
        })
        .collect()
}
