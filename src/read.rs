use cf_verdicts::{filter::Category, table::Scheme};
use std::io::{stdin, Write};
use termcolor::{Color, StandardStream, WriteColor};

#[allow(unused_must_use)]
pub fn read_line_to(stdout: &mut StandardStream, prompt: &[u8], dest: &mut String) {
    dest.clear();
    loop {
        stdout.write(prompt);
        stdout.flush();
        match stdin().read_line(dest) {
            Ok(_) => {
                dest.truncate(dest.trim_end().len());
                return;
            }
            Err(e) => write_error!(stdout, "Error", "Read: {}", e.to_string()),
        }
        stdout.reset();
    }
}
pub fn read_line(stdout: &mut StandardStream, prompt: &[u8]) -> String {
    let mut ret = String::new();
    read_line_to(stdout, prompt, &mut ret);
    ret
}

#[allow(unused_must_use)]
pub fn read_category(stdout: &mut StandardStream) -> Category {
    let mut buf = String::new();
    loop {
        read_line_to(
            stdout,
            b"Filter (all/div1/div2/div3/div4/div1+2/educational/global): ",
            &mut buf,
        );
        match buf.parse::<Category>() {
            Ok(v) => return v,
            Err(e) => write_error!(stdout, "Error", "parse: {}", e),
        }
        stdout.reset();
    }
}

#[allow(unused_must_use)]
pub fn read_scheme(stdout: &mut StandardStream) -> Scheme {
    let mut buf = String::new();
    loop {
        read_line_to(stdout, b"Scheme (plain/colorful/greenred): ", &mut buf);
        match buf.parse::<Scheme>() {
            Ok(v) => return v,
            Err(e) => write_error!(stdout, "Error", "parse: {}", e),
        }
        stdout.reset();
    }
}
