//! Shelf menu (bounded variant)
//!
//! At most [`SHELF_CAPACITY`] books, single genre per book, and a
//! two-phase delete behind a confirmation prompt. `0` cancels any pending
//! sub-workflow and returns to the parent menu.

use anyhow::Result;
use bookverse_common::{Catalog, DeleteOutcome, Record, SHELF_CAPACITY};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::prompt;
use crate::render;

pub fn run() -> Result<()> {
    let mut catalog = Catalog::bounded(SHELF_CAPACITY);

    loop {
        render::heading("Book Verse");
        println!("1. Manage Books (Add/Delete)");
        println!("2. Search by Title");
        println!("3. Display All Books");
        println!("4. Exit");

        match prompt::read_choice("Enter your choice:")? {
            Some(1) => manage_books(&mut catalog)?,
            Some(2) => search_by_title(&catalog)?,
            Some(3) => display_all(&catalog),
            Some(4) => {
                println!("\nExiting... Goodbye!");
                return Ok(());
            }
            _ => render::error("Invalid choice! Please try again."),
        }
    }
}

fn manage_books(catalog: &mut Catalog) -> Result<()> {
    render::heading("Manage Books");
    println!("1. Add Book");
    println!("2. Delete Book");
    println!("0. Back to Main Menu");

    match prompt::read_choice("Enter your choice:")? {
        Some(1) => add_book(catalog)?,
        Some(2) => delete_book(catalog)?,
        Some(0) => render::notice("Returning to main menu."),
        _ => render::error("Invalid choice! Please try again."),
    }
    Ok(())
}

fn add_book(catalog: &mut Catalog) -> Result<()> {
    println!("\nEnter book details below:");
    let title = prompt::read_line("Title:")?;
    let author = prompt::read_line("Author:")?;
    let genre = prompt::read_line("Genre:")?;
    let year = prompt::read_year("Publication Year:")?;

    debug!(%title, "adding book to shelf");
    match catalog.add(Record::with_genre(title, author, genre, year)) {
        Ok(()) => render::success("Book added successfully!"),
        Err(err) => render::error(&format!("{err}.")),
    }
    Ok(())
}

fn search_by_title(catalog: &Catalog) -> Result<()> {
    let query = prompt::read_line("\nEnter partial title to search (or 0 to go back):")?;
    if query == "0" {
        render::notice("Returning to main menu.");
        return Ok(());
    }

    let matches = catalog.search_by_title(&query);
    render::heading("Search Results");
    if matches.is_empty() {
        render::notice(&format!("No book found containing: \"{query}\""));
    } else {
        render::print_numbered_details(matches);
    }
    Ok(())
}

fn display_all(catalog: &Catalog) {
    if catalog.is_empty() {
        render::notice("No books in your collection yet!");
        return;
    }
    render::heading("Books in Your Collection");
    render::print_numbered_details(catalog.books());
}

/// Two-phase delete: resolve a partial title to numbered matches, take a
/// one-based selection (`0` cancels), then require an explicit `Y` while
/// showing the record about to go.
fn delete_book(catalog: &mut Catalog) -> Result<()> {
    let query = prompt::read_line("\nEnter partial title of the book to delete (or 0 to go back):")?;
    if query == "0" {
        render::notice("Returning to main menu.");
        return Ok(());
    }

    let matches = catalog.title_matches(&query);
    if matches.is_empty() {
        render::notice(&format!("No book found containing: \"{query}\""));
        return Ok(());
    }

    render::heading("Matching Books");
    for (i, &position) in matches.iter().enumerate() {
        println!("{}", format!("{}.", i + 1).bold());
        render::print_detail(&catalog.books()[position]);
    }

    let choice =
        prompt::read_choice("\nEnter the number of the book you want to delete (or 0 to cancel):")?;
    let selected = match choice {
        Some(0) => {
            render::notice("Deletion cancelled.");
            return Ok(());
        }
        Some(n) if (n as usize) <= matches.len() => (n - 1) as usize,
        _ => {
            render::error("Invalid choice! Please try again.");
            return Ok(());
        }
    };

    println!("\nAre you sure you want to delete this book?");
    render::print_detail(&catalog.books()[matches[selected]]);
    let confirmed = prompt::confirm("Enter 'Y' to confirm or 'N' to cancel:")?;

    match catalog.delete_by_selection(&query, selected, confirmed) {
        DeleteOutcome::Deleted(removed) => {
            debug!(title = removed.title(), "book deleted");
            render::success("Book deleted successfully!");
        }
        DeleteOutcome::Cancelled => render::notice("Deletion cancelled."),
        // The selection was validated against the same match list above,
        // so these arms are unreachable in the interactive flow.
        DeleteOutcome::InvalidSelection => render::error("Invalid choice! Please try again."),
        DeleteOutcome::NoMatch => {
            render::notice(&format!("No book found containing: \"{query}\""))
        }
    }
    Ok(())
}
