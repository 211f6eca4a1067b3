use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single book in the library.
///
/// Field order here is the field order on disk, so keep it stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
    /// Serialized as `YYYY-MM-DD`.
    pub date_added: NaiveDate,
}

impl Book {
    pub fn new(
        title: String,
        author: String,
        year: i32,
        genre: String,
        read: bool,
        date_added: NaiveDate,
    ) -> Self {
        Self {
            title,
            author,
            year,
            genre,
            read,
            date_added,
        }
    }

    /// Case-insensitive title equality, the lookup rule used by `remove`.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

/// Unvalidated input for a new book, as supplied by a UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }

    /// Stamps the input with the day it was added. Callers must validate first.
    pub fn into_book(self, date_added: NaiveDate) -> Book {
        Book::new(
            self.title.trim().to_string(),
            self.author.trim().to_string(),
            self.year,
            self.genre.trim().to_string(),
            self.read,
            date_added,
        )
    }
}

/// The field a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    pub fn value_of<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
        }
    }
}

/// Reading statistics over the whole collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub total_count: usize,
    pub read_count: usize,
    /// `None` for an empty library; there is nothing to divide by.
    pub read_percentage: Option<f64>,
}

impl Statistics {
    pub fn from_books(books: &[Book]) -> Self {
        let total_count = books.len();
        let read_count = books.iter().filter(|b| b.read).count();
        let read_percentage = if total_count == 0 {
            None
        } else {
            Some(100.0 * read_count as f64 / total_count as f64)
        };

        Self {
            total_count,
            read_count,
            read_percentage,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}
