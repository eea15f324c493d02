//! Book record type
//!
//! One entry in the catalog: title, author, genre list, publication year.
//! Immutable after construction; read access through getters only.

/// A single book. No identity field — the catalog addresses records by
/// position, and duplicate titles/authors are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    title: String,
    author: String,
    genres: Vec<String>,
    year: i32,
}

impl Record {
    /// Build a record with a full genre list. No field validation: empty
    /// strings and non-positive years are stored as given.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genres: Vec<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genres,
            year,
        }
    }

    /// Build a record with a single genre (the bounded-shelf input shape).
    pub fn with_genre(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> Self {
        Self::new(title, author, vec![genre.into()], year)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// True when the title is the empty string. Used defensively by
    /// callers; an empty title is otherwise legal.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }

    /// One-line rendering used by the unbounded library menu:
    /// `Title: T, Author: A, Genres: g1, g2, Year: Y`.
    pub fn summary_line(&self) -> String {
        format!(
            "Title: {}, Author: {}, Genres: {}, Year: {}",
            self.title,
            self.author,
            self.genres.join(", "),
            self.year
        )
    }

    /// Labeled multi-line block used by the bounded shelf menu. Labels are
    /// left-aligned in a 20-column field; a 40-dash rule closes the block.
    pub fn detail_block(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{:<20}{}\n", "Title: ", self.title));
        out.push_str(&format!("{:<20}{}\n", "Author: ", self.author));
        out.push_str(&format!("{:<20}{}\n", "Genre: ", self.genres.join(", ")));
        out.push_str(&format!("{:<20}{}\n", "Publication Year: ", self.year));
        out.push_str(&"-".repeat(40));
        out.push('\n');
        out
    }
}
