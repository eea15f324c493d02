//! BookVerse Common - Catalog core shared by the BookVerse menus
//!
//! Pure in-memory data model: no I/O, no persistence, no threads. The
//! interactive binary owns all terminal concerns.

pub mod catalog;
pub mod error;
pub mod record;

pub use catalog::{Catalog, CapacityPolicy, DeleteOutcome, SHELF_CAPACITY};
pub use error::CatalogError;
pub use record::Record;
