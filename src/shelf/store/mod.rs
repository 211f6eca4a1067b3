//! # Storage Layer
//!
//! This module defines the storage abstraction for shelf. The [`DataStore`] trait
//! is the durable mirror of a [`crate::library::Library`]: it knows how to read
//! and write the *whole* collection, nothing more.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep the record store **decoupled** from the file format
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore` the backing file is a JSON array of books, four-space
//! indented, fields in declaration order:
//!
//! ```text
//! [
//!     {
//!         "title": "Dune",
//!         "author": "Frank Herbert",
//!         "year": 1965,
//!         "genre": "Sci-Fi",
//!         "read": true,
//!         "date_added": "2024-03-09"
//!     }
//! ]
//! ```
//!
//! Loads and saves are whole-collection. There is no incremental write.

use crate::error::Result;
use crate::model::Book;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for book storage.
pub trait DataStore {
    /// Read the full collection. `Ok(None)` means nothing has been stored yet.
    fn load_books(&self) -> Result<Option<Vec<Book>>>;

    /// Replace the stored collection with `books`.
    fn save_books(&mut self, books: &[Book]) -> Result<()>;

    /// Where the collection lives, for stores that have a location.
    fn location(&self) -> Option<&Path>;
}
