use crate::write::write_table;
use cf_verdicts::{
    api::Session,
    cache::Cache,
    filter::Category,
    table::{self, Scheme},
};
use std::io::Write;
use termcolor::{Color, StandardStream, WriteColor};

#[allow(unused_must_use)]
pub async fn render(
    stdout: &mut StandardStream,
    session: &Session,
    cache: &mut Cache,
    handle: &str,
    category: Category,
    scheme: Scheme,
) {
    if handle.is_empty() {
        write_error!(stdout, "Error", "No handle set!");
        return;
    }
    write_progress!(stdout, "Fetch", "Loading submissions of {}", handle);
    stdout.reset();
    match table::build(session, cache, handle, category, scheme).await {
        Ok(rows) => {
            write_table(stdout, &rows);
            write_ok!(stdout, "Finish", "Rendered {} rounds", rows.len());
        }
        Err(e) if e.is_rejected() => {
            write_error!(stdout, "Error", "{}. Please check the handle.", e)
        }
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
    stdout.reset();
}
