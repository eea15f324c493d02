//! Library menu (unbounded variant)
//!
//! Add, search, genre filter, full listing, and genre analytics over an
//! unbounded catalog. All state lives in the catalog owned by this loop
//! and dies with the process.

use anyhow::Result;
use bookverse_common::{Catalog, Record};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::prompt;
use crate::render;

pub fn run() -> Result<()> {
    let mut catalog = Catalog::unbounded();

    loop {
        println!("\n{}", "--- Book Verse ---".bright_cyan().bold());
        println!("1. Add Book");
        println!("2. Search by Title");
        println!("3. List Books by Genre");
        println!("4. Display All Books");
        println!("5. Genre Analytics");
        println!("6. Exit");

        match prompt::read_choice("Enter choice:")? {
            Some(1) => add_book(&mut catalog)?,
            Some(2) => search_by_title(&catalog)?,
            Some(3) => list_by_genre(&catalog)?,
            Some(4) => display_all(&catalog),
            Some(5) => genre_analytics(&catalog),
            Some(6) => {
                println!("Exiting... Goodbye!");
                return Ok(());
            }
            _ => println!("{}", "Invalid choice!".red()),
        }
    }
}

fn add_book(catalog: &mut Catalog) -> Result<()> {
    let title = prompt::read_line("Enter title:")?;
    let author = prompt::read_line("Enter author:")?;
    let genre_input = prompt::read_line("Enter genres (comma-separated):")?;
    let genres = prompt::split_genres(&genre_input);
    let year = prompt::read_year("Enter publication year:")?;

    debug!(%title, "adding book to library");
    catalog.add(Record::new(title, author, genres, year))?;
    println!("{}", "Book added successfully!".green());
    Ok(())
}

fn search_by_title(catalog: &Catalog) -> Result<()> {
    let query = prompt::read_line("Enter part of the title to search:")?;
    let matches = catalog.search_by_title(&query);
    if matches.is_empty() {
        println!("No book found containing: {query}");
    } else {
        render::print_summaries(matches);
    }
    Ok(())
}

fn list_by_genre(catalog: &Catalog) -> Result<()> {
    let genre = prompt::read_line("Enter genre:")?;
    let matches = catalog.filter_by_genre(&genre);
    if matches.is_empty() {
        println!("No books found in the genre: {genre}");
    } else {
        render::print_summaries(matches);
    }
    Ok(())
}

fn display_all(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("No books in your collection yet!");
        return;
    }
    println!("Books in your collection:");
    render::print_summaries(catalog.books());
}

fn genre_analytics(catalog: &Catalog) {
    println!("Genre Analytics:");
    for (genre, count) in catalog.genre_analytics() {
        println!("{genre}: {count} books");
    }
}
