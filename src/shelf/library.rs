//! # Record Store
//!
//! [`Library`] owns the authoritative in-memory collection of books and its
//! durable mirror, a [`DataStore`]. It is an explicit value owned by its
//! caller: two libraries over two stores never share anything.
//!
//! File I/O happens only in [`Library::load`] and [`Library::save`]. Mutations
//! touch memory only; the command layer decides when to persist.
//!
//! Load failures are not errors. A missing, unreadable or malformed backing
//! file leaves the library empty and is reported as a [`LoadOutcome`] so the
//! UI can show a notice and carry on.

use crate::error::Result;
use crate::model::Book;
use crate::store::DataStore;

/// What happened when the library tried to read its backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store was read; it held this many books.
    Loaded(usize),
    /// Nothing has been saved yet.
    Missing,
    /// The store could not be read or parsed; the library starts empty.
    Failed(String),
}

pub struct Library<S: DataStore> {
    store: S,
    books: Vec<Book>,
}

impl<S: DataStore> Library<S> {
    /// An empty library over `store`. Nothing is read until [`Library::load`].
    pub fn new(store: S) -> Self {
        Self {
            store,
            books: Vec::new(),
        }
    }

    /// Creates a library and immediately loads it.
    pub fn open(store: S) -> (Self, LoadOutcome) {
        let mut library = Self::new(store);
        let outcome = library.load();
        (library, outcome)
    }

    /// Replaces the in-memory collection with the store's contents.
    pub fn load(&mut self) -> LoadOutcome {
        match self.store.load_books() {
            Ok(Some(books)) => {
                tracing::debug!(
                    count = books.len(),
                    location = ?self.store.location(),
                    "library loaded"
                );
                let count = books.len();
                self.books = books;
                LoadOutcome::Loaded(count)
            }
            Ok(None) => {
                tracing::debug!(location = ?self.store.location(), "no saved library");
                self.books.clear();
                LoadOutcome::Missing
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load library, starting empty");
                self.books.clear();
                LoadOutcome::Failed(e.to_string())
            }
        }
    }

    /// Writes the whole collection to the store. On failure memory is untouched.
    pub fn save(&mut self) -> Result<()> {
        match self.store.save_books(&self.books) {
            Ok(()) => {
                tracing::debug!(
                    count = self.books.len(),
                    location = ?self.store.location(),
                    "library saved"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save library");
                Err(e)
            }
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends to the end of the collection.
    pub(crate) fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Removes every book whose title matches case-insensitively, returning them.
    pub(crate) fn remove_by_title(&mut self, title: &str) -> Vec<Book> {
        let (removed, kept): (Vec<Book>, Vec<Book>) = std::mem::take(&mut self.books)
            .into_iter()
            .partition(|b| b.title_matches(title));
        self.books = kept;
        removed
    }
}
