//! Terminal rendering for catalog output
//!
//! Color lives here; the record formats themselves come from
//! `bookverse_common` so the wire-visible layout has one owner.

use bookverse_common::Record;
use owo_colors::OwoColorize;

pub fn success(message: &str) {
    println!("\n{} {}", "[Success]".green().bold(), message);
}

pub fn error(message: &str) {
    println!("\n{} {}", "[Error]".red().bold(), message);
}

pub fn notice(message: &str) {
    println!("\n{} {}", "[Notice]".yellow(), message);
}

pub fn heading(title: &str) {
    println!("\n{}", format!("=== {title} ===").bright_cyan().bold());
}

/// One-line-per-book listing (library variant).
pub fn print_summaries<'a>(records: impl IntoIterator<Item = &'a Record>) {
    for record in records {
        println!("{}", record.summary_line());
    }
}

/// Labeled block per book (shelf variant), numbered from 1.
pub fn print_numbered_details<'a>(records: impl IntoIterator<Item = &'a Record>) {
    for (i, record) in records.into_iter().enumerate() {
        println!("{}", format!("Book #{}:", i + 1).bold());
        print!("{}", record.detail_block());
    }
}

/// Single record block, used by the delete confirmation step.
pub fn print_detail(record: &Record) {
    print!("{}", record.detail_block());
}
