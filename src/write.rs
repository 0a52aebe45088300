use cf_verdicts::table::{Row, SOLVED_GREEN};
use std::io::Write;
use termcolor::{StandardStream, WriteColor};

#[allow(unused_must_use)]
pub fn write_table(stdout: &mut StandardStream, rows: &[Row]) {
    let name_width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0);
    for row in rows {
        write!(stdout, "{:<width$}  ", row.name, width = name_width);
        if row.highlight {
            crate::color::set_bg(stdout, SOLVED_GREEN);
        }
        write!(stdout, "{:>6}", row.id);
        stdout.reset();
        for cell in &row.cells {
            write!(stdout, "  ");
            if let Some(bg) = cell.background {
                crate::color::set_bg(stdout, bg);
            }
            write!(stdout, "{} {}", cell.letter, cell.symbol);
            stdout.reset();
        }
        writeln!(stdout, "  {}", row.url());
    }
}
