//! In-memory book catalog
//!
//! Ordered collection of [`Record`]s with linear-scan queries: substring
//! title search, exact genre filter, genre counts, and a two-phase
//! delete-with-confirmation for the bounded shelf variant.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::CatalogError;
use crate::record::Record;

/// Capacity of the bounded shelf variant.
pub const SHELF_CAPACITY: usize = 100;

/// Storage policy chosen at construction. The unbounded library and the
/// bounded shelf are the same catalog under two policies, not two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Grows without limit (bounded only by memory).
    Unbounded,
    /// Rejects adds once the count reaches the limit.
    Bounded(usize),
}

/// Result of a two-phase delete. Every variant except `Deleted` leaves the
/// catalog untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The query matched nothing; nothing to select from.
    NoMatch,
    /// The selection index fell outside the match list.
    InvalidSelection,
    /// The caller declined at the confirmation step.
    Cancelled,
    /// Exactly one record was removed; here it is.
    Deleted(Record),
}

/// The catalog. Insertion order is preserved, duplicates are allowed, and
/// all queries return results in insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Record>,
    policy: CapacityPolicy,
}

impl Catalog {
    /// Library variant: no capacity limit.
    pub fn unbounded() -> Self {
        Self {
            books: Vec::new(),
            policy: CapacityPolicy::Unbounded,
        }
    }

    /// Shelf variant: at most `capacity` records, adds past that rejected.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            books: Vec::with_capacity(capacity),
            policy: CapacityPolicy::Bounded(capacity),
        }
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// All records, in insertion order.
    pub fn books(&self) -> &[Record] {
        &self.books
    }

    /// Append a record at the end. A bounded catalog at capacity returns
    /// [`CatalogError::ShelfFull`] and stays unchanged.
    pub fn add(&mut self, record: Record) -> Result<(), CatalogError> {
        if let CapacityPolicy::Bounded(capacity) = self.policy {
            if self.books.len() >= capacity {
                debug!(capacity, "add rejected, shelf full");
                return Err(CatalogError::ShelfFull { capacity });
            }
        }
        debug!(title = record.title(), "record added");
        self.books.push(record);
        Ok(())
    }

    /// Positions of every record whose title contains `query` as a
    /// case-sensitive substring. The empty query matches every record.
    /// Backs both search and the delete query phase.
    pub fn title_matches(&self, query: &str) -> Vec<usize> {
        self.books
            .iter()
            .enumerate()
            .filter(|(_, book)| book.title().contains(query))
            .map(|(i, _)| i)
            .collect()
    }

    /// Substring search on title, results in insertion order.
    pub fn search_by_title(&self, query: &str) -> Vec<&Record> {
        self.title_matches(query)
            .into_iter()
            .map(|i| &self.books[i])
            .collect()
    }

    /// Records whose genre list contains `genre` exactly (case-sensitive,
    /// whole-element match, no substrings).
    pub fn filter_by_genre(&self, genre: &str) -> Vec<&Record> {
        self.books
            .iter()
            .filter(|book| book.genres().iter().any(|g| g == genre))
            .collect()
    }

    /// Count of books per genre, sorted ascending by genre name. Counts one
    /// per genre occurrence, so a record that lists the same genre twice
    /// contributes two to that genre's total.
    pub fn genre_analytics(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for book in &self.books {
            for genre in book.genres() {
                *counts.entry(genre.as_str()).or_insert(0) += 1;
            }
        }
        counts
            .into_iter()
            .map(|(genre, n)| (genre.to_string(), n))
            .collect()
    }

    /// Two-phase delete. `selected` is a zero-based index into the match
    /// list produced by [`Self::title_matches`] for `query`; interactive
    /// callers translate the user's one-based entry before calling.
    ///
    /// Removal shifts every later record down one slot, so relative order
    /// of the survivors is preserved.
    pub fn delete_by_selection(
        &mut self,
        query: &str,
        selected: usize,
        confirmed: bool,
    ) -> DeleteOutcome {
        let matches = self.title_matches(query);
        if matches.is_empty() {
            return DeleteOutcome::NoMatch;
        }
        let Some(&position) = matches.get(selected) else {
            return DeleteOutcome::InvalidSelection;
        };
        if !confirmed {
            return DeleteOutcome::Cancelled;
        }
        let removed = self.books.remove(position);
        debug!(title = removed.title(), position, "record deleted");
        DeleteOutcome::Deleted(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::unbounded();
        catalog
            .add(Record::new(
                "Dune",
                "Herbert",
                vec!["SciFi".to_string()],
                1965,
            ))
            .unwrap();
        catalog
            .add(Record::new(
                "Foundation",
                "Asimov",
                vec!["SciFi".to_string()],
                1951,
            ))
            .unwrap();
        catalog
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let catalog = sample();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.books()[0].title(), "Dune");
        assert_eq!(catalog.books()[1].title(), "Foundation");
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut catalog = Catalog::unbounded();
        let rec = Record::with_genre("Dune", "Herbert", "SciFi", 1965);
        catalog.add(rec.clone()).unwrap();
        catalog.add(rec).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_bounded_rejects_add_at_capacity() {
        let mut catalog = Catalog::bounded(SHELF_CAPACITY);
        for i in 0..SHELF_CAPACITY {
            catalog
                .add(Record::with_genre(format!("Book {i}"), "Author", "Genre", 2000))
                .unwrap();
        }
        let overflow = Record::with_genre("One Too Many", "Author", "Genre", 2000);
        let err = catalog.add(overflow).unwrap_err();
        assert_eq!(
            err,
            CatalogError::ShelfFull {
                capacity: SHELF_CAPACITY
            }
        );
        assert_eq!(catalog.len(), SHELF_CAPACITY);
    }

    #[test]
    fn test_search_by_title_substring() {
        let catalog = sample();
        let hits = catalog.search_by_title("Dun");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title(), "Dune");
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let catalog = sample();
        assert!(catalog.search_by_title("dune").is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let catalog = sample();
        assert_eq!(catalog.search_by_title("").len(), 2);
    }

    #[test]
    fn test_filter_by_genre_exact_match_only() {
        let catalog = sample();
        let hits = catalog.filter_by_genre("SciFi");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title(), "Dune");
        assert_eq!(hits[1].title(), "Foundation");
        // Substrings of a genre are not matches.
        assert!(catalog.filter_by_genre("Sci").is_empty());
    }

    #[test]
    fn test_genre_analytics_sorted_ascending() {
        let mut catalog = sample();
        catalog
            .add(Record::new(
                "The Hobbit",
                "Tolkien",
                vec!["Fantasy".to_string()],
                1937,
            ))
            .unwrap();
        assert_eq!(
            catalog.genre_analytics(),
            vec![("Fantasy".to_string(), 1), ("SciFi".to_string(), 2)]
        );
    }

    #[test]
    fn test_genre_analytics_counts_repeated_genre_twice() {
        let mut catalog = Catalog::unbounded();
        catalog
            .add(Record::new(
                "Dune",
                "Herbert",
                vec!["SciFi".to_string(), "SciFi".to_string()],
                1965,
            ))
            .unwrap();
        assert_eq!(catalog.genre_analytics(), vec![("SciFi".to_string(), 2)]);
    }

    #[test]
    fn test_genre_analytics_empty_catalog() {
        let catalog = Catalog::unbounded();
        assert!(catalog.genre_analytics().is_empty());
    }

    fn abc_shelf() -> Catalog {
        let mut catalog = Catalog::bounded(SHELF_CAPACITY);
        for title in ["Alpha", "Beta", "Gamma"] {
            catalog
                .add(Record::with_genre(title, "Author", "Genre", 2000))
                .unwrap();
        }
        catalog
    }

    #[test]
    fn test_delete_confirmed_compacts_in_order() {
        let mut catalog = abc_shelf();
        let outcome = catalog.delete_by_selection("Beta", 0, true);
        match outcome {
            DeleteOutcome::Deleted(removed) => assert_eq!(removed.title(), "Beta"),
            other => panic!("expected Deleted, got {other:?}"),
        }
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.books()[0].title(), "Alpha");
        assert_eq!(catalog.books()[1].title(), "Gamma");
    }

    #[test]
    fn test_delete_unconfirmed_changes_nothing() {
        let mut catalog = abc_shelf();
        let before = catalog.books().to_vec();
        assert_eq!(
            catalog.delete_by_selection("Beta", 0, false),
            DeleteOutcome::Cancelled
        );
        assert_eq!(catalog.books(), &before[..]);
    }

    #[test]
    fn test_delete_selection_out_of_range() {
        let mut catalog = abc_shelf();
        let before = catalog.books().to_vec();
        assert_eq!(
            catalog.delete_by_selection("a", 99, true),
            DeleteOutcome::InvalidSelection
        );
        assert_eq!(catalog.books(), &before[..]);
    }

    #[test]
    fn test_delete_no_match() {
        let mut catalog = abc_shelf();
        assert_eq!(
            catalog.delete_by_selection("Omega", 0, true),
            DeleteOutcome::NoMatch
        );
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_delete_resolves_among_multiple_matches() {
        let mut catalog = abc_shelf();
        // "a" is a substring of all three titles; select the second match.
        let outcome = catalog.delete_by_selection("a", 1, true);
        match outcome {
            DeleteOutcome::Deleted(removed) => assert_eq!(removed.title(), "Beta"),
            other => panic!("expected Deleted, got {other:?}"),
        }
        assert_eq!(catalog.books()[0].title(), "Alpha");
        assert_eq!(catalog.books()[1].title(), "Gamma");
    }

    #[test]
    fn test_scenario_dune_foundation() {
        let catalog = sample();
        let hits = catalog.search_by_title("Dun");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title(), "Dune");
        let scifi = catalog.filter_by_genre("SciFi");
        assert_eq!(scifi.len(), 2);
        assert_eq!(catalog.genre_analytics(), vec![("SciFi".to_string(), 2)]);
    }
}
