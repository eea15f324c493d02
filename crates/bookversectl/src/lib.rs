//! BookVerse Control - interactive terminal client for the book catalog
//!
//! Two menu loops over the shared catalog core: the unbounded library and
//! the 100-book shelf with delete-and-confirm.

pub mod library;
pub mod prompt;
pub mod render;
pub mod shelf;
