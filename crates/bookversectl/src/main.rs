//! BookVerse Control - CLI entry point
//!
//! Picks a catalog variant and hands control to its menu loop. Always
//! exits 0 once the user selects Exit.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use bookversectl::{library, shelf};

#[derive(Parser)]
#[command(name = "bookversectl")]
#[command(about = "Book Verse - Personal book catalog", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (written to stderr)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Unbounded catalog: add, search, genre filter, genre analytics
    Library,

    /// Bounded 100-book shelf: add, search, delete with confirmation
    Shelf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Library => library::run(),
        Commands::Shelf => shelf::run(),
    }
}
