use crate::{
    api::{
        types::{Contest, Submission},
        Session,
    },
    cache::Cache,
    config,
    error::Result,
    filter::{self, Category},
    group,
    rating,
    verdict::{self, Symbol},
};
use futures::try_join;
use std::{collections::HashMap, str::FromStr};
use termcolor::Color;

pub const SOLVED_GREEN: Color = Color::Rgb(128, 244, 124);
pub const FAILED_RED: Color = Color::Rgb(248, 124, 124);
pub const UNATTEMPTED_GRAY: Color = Color::Rgb(214, 214, 214);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Plain,
    Colorful,
    GreenRed,
}
impl FromStr for Scheme {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "plain" => Scheme::Plain,
            "colorful" => Scheme::Colorful,
            "greenred" | "green-red" => Scheme::GreenRed,
            unknown => return Err(format!("unknown color scheme {:?}", unknown)),
        })
    }
}

pub struct Cell {
    pub letter: String,
    pub symbol: Symbol,
    pub background: Option<Color>,
}
pub struct Row {
    pub name: String,
    pub id: u32,
    /// Every problem of the round solved, green/red scheme active.
    pub highlight: bool,
    pub cells: Vec<Cell>,
}
impl Row {
    pub fn url(&self) -> String {
        format!("{}/{}", config::table::CONTEST_URL_BASE, self.id)
    }
}

/// Fetch everything one render needs and assemble the rows. A rejected
/// user.status envelope aborts the whole render.
pub async fn build(
    session: &Session,
    cache: &mut Cache,
    handle: &str,
    category: Category,
    scheme: Scheme,
) -> Result<Vec<Row>> {
    let (submissions, contests) = try_join!(session.user_status(handle), session.contest_list())?;
    cache.ensure_problem_set(session).await?;
    Ok(assemble(&contests, submissions, cache, category, scheme))
}

/// Rendering core: group, sort rounds descending, filter by category, skip
/// gym-range ids and rounds without contest metadata, classify and color
/// each letter cell.
pub fn assemble(
    contests: &HashMap<u32, Contest>,
    submissions: Vec<Submission>,
    cache: &mut Cache,
    category: Category,
    scheme: Scheme,
) -> Vec<Row> {
    let grouped = group::by_round(submissions);
    let rounds: Vec<u32> = grouped.keys().rev().copied().collect();
    let mut rows = Vec::new();
    for round in filter::filter_rounds(contests, &rounds, category) {
        if round > config::table::CONTEST_ID_CEILING {
            continue;
        }
        let contest = match contests.get(&round) {
            Some(c) => c,
            None => continue,
        };
        let letters = cache.problem_letters(round);
        let round_subs = &grouped[&round];
        let mut cells = Vec::with_capacity(letters.len());
        let mut all_solved = true;
        for letter in letters {
            let bucket = round_subs.get(&letter).map(Vec::as_slice).unwrap_or(&[]);
            let symbol = verdict::best_symbol(bucket);
            all_solved &= symbol == Symbol::Solved;
            cells.push(Cell {
                background: cell_background(scheme, symbol, cache.problem_rating(round, &letter)),
                letter,
                symbol,
            });
        }
        rows.push(Row {
            name: contest.name.clone(),
            id: round,
            highlight: all_solved && scheme == Scheme::GreenRed,
            cells,
        });
    }
    rows
}

fn cell_background(scheme: Scheme, symbol: Symbol, rating: Option<u32>) -> Option<Color> {
    match scheme {
        Scheme::Plain => None,
        Scheme::Colorful => {
            if symbol == Symbol::Solved {
                Some(rating::band_color(rating))
            } else {
                None
            }
        }
        Scheme::GreenRed => Some(match symbol {
            Symbol::Solved => SOLVED_GREEN,
            Symbol::Failed => FAILED_RED,
            Symbol::Unattempted => UNATTEMPTED_GRAY,
        }),
    }
}
