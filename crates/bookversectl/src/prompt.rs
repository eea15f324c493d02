//! Interactive prompt helpers
//!
//! Thin wrappers over stdin/stdout: print a colored label, flush, read one
//! line. Parsing is split into pure functions so it can be tested without
//! a terminal.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

/// Print `label`, flush, and read one line from stdin. The trailing
/// newline is stripped; interior whitespace is kept as typed, since book
/// titles and authors may legitimately contain leading or trailing spaces.
pub fn read_line(label: &str) -> io::Result<String> {
    print!("{} ", label.bright_magenta());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    while input.ends_with('\n') || input.ends_with('\r') {
        input.pop();
    }
    Ok(input)
}

/// Read a menu choice. Returns `None` for anything that is not a number,
/// which callers treat as the invalid-choice case.
pub fn read_choice(label: &str) -> io::Result<Option<u32>> {
    let input = read_line(label)?;
    Ok(parse_choice(&input))
}

/// Read a publication year, re-prompting until the input parses.
pub fn read_year(label: &str) -> io::Result<i32> {
    loop {
        let input = read_line(label)?;
        match input.trim().parse::<i32>() {
            Ok(year) => return Ok(year),
            Err(_) => println!("{}", "Please enter a whole number.".yellow()),
        }
    }
}

/// Ask a yes/no question. Only `Y` (case-insensitive) confirms; anything
/// else cancels.
pub fn confirm(label: &str) -> io::Result<bool> {
    let input = read_line(label)?;
    Ok(is_confirmed(&input))
}

pub fn parse_choice(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

pub fn is_confirmed(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Split a comma-separated genre line. Segments are kept exactly as typed
/// (no trimming), and a line with no comma is a single genre.
pub fn split_genres(input: &str) -> Vec<String> {
    input.split(',').map(str::to_string).collect()
}
