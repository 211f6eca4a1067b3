use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::path::Path;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: Option<Vec<Book>>,
    corrupt: bool,
    fail_saves: bool,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `books`, as if a previous session saved them.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Some(books),
            ..Self::default()
        }
    }

    /// Every load fails as if the backing data were unreadable.
    pub fn corrupted() -> Self {
        Self {
            corrupt: true,
            ..Self::default()
        }
    }

    /// Every save fails as if the backing medium were read-only.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn stored(&self) -> Option<&[Book]> {
        self.books.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl DataStore for InMemoryStore {
    fn load_books(&self) -> Result<Option<Vec<Book>>> {
        if self.corrupt {
            return Err(ShelfError::Api("stored data is unreadable".to_string()));
        }
        Ok(self.books.clone())
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        if self.fail_saves {
            return Err(ShelfError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        self.books = Some(books.to_vec());
        self.save_count += 1;
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::NaiveDate;

    pub fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid fixture date")
    }

    pub fn book(title: &str, author: &str, read: bool) -> Book {
        Book::new(
            title.to_string(),
            author.to_string(),
            1990,
            "Fiction".to_string(),
            read,
            fixed_day(),
        )
    }

    pub struct StoreFixture {
        books: Vec<Book>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self { books: Vec::new() }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Book {}", i + 1);
                let author = format!("Author {}", i + 1);
                self.books.push(book(&title, &author, false));
            }
            self
        }

        pub fn with_book(mut self, title: &str, author: &str) -> Self {
            self.books.push(book(title, author, false));
            self
        }

        pub fn with_read_book(mut self, title: &str, author: &str) -> Self {
            self.books.push(book(title, author, true));
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_books(self.books)
        }
    }
}
