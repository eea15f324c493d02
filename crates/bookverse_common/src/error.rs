//! Catalog error types

/// Failures the catalog reports to its caller. These are notices, not
/// crashes: the caller prints them and returns to the menu, and the
/// catalog is guaranteed unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("book collection is full ({capacity} books), cannot add more")]
    ShelfFull { capacity: usize },
}
