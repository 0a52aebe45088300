use cf_verdicts::{api::Session, cache::Cache, filter::Category, table::Scheme};
use clap::{crate_description, crate_name, Arg, Command};
use pretty_env_logger::init_timed;
use std::io::Write;
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod render;
}
mod read;
mod write;

use command::render::render;
use read::{read_category, read_line, read_scheme};

#[allow(unused_must_use)]
#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(Arg::new("handle").help("Codeforces handle to render on startup"))
        .get_matches();
    let session = Session::new();
    let mut cache = Cache::new();
    let mut handle = String::new();
    let mut category = Category::All;
    let mut scheme = Scheme::Colorful;
    if let Some(h) = app.get_one::<String>("handle") {
        handle = h.clone();
        render(&mut stdout, &session, &mut cache, &handle, category, scheme).await;
        stdout.reset();
    }
    loop {
        match read_line(&mut stdout, b"cf-verdicts> ").trim() {
            "handle" => {
                handle = read_line(&mut stdout, b"Handle: ");
                write_info!(&mut stdout, "Info", "Handle set to {}", handle);
            }
            "filter" => category = read_category(&mut stdout),
            "scheme" => {
                // A scheme change repaints right away, like the page toggle.
                scheme = read_scheme(&mut stdout);
                if !handle.is_empty() {
                    render(&mut stdout, &session, &mut cache, &handle, category, scheme).await;
                }
            }
            "render" => {
                render(&mut stdout, &session, &mut cache, &handle, category, scheme).await
            }
            "exit" => break,
            unknown => write_error!(
                &mut stdout,
                "Error",
                r#"cf-verdicts: unknown command "{}""#,
                unknown
            ),
        }
        stdout.reset();
    }
}
