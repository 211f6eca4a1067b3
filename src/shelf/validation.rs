//! Field validation for new books.
//!
//! A book is accepted only if:
//! - Its title is not blank
//! - Its publication year is between [`MIN_YEAR`] and the current calendar year
//!
//! These functions are pure. Re-prompting on failure is the caller's business;
//! the interactive shell loops on them, while `commands::add` simply rejects.

use crate::model::NewBook;
use chrono::{Datelike, Local};

/// Earliest accepted publication year.
pub const MIN_YEAR: i32 = 1000;

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Validates a publication year against `[MIN_YEAR, current_year]`.
///
/// # Examples
/// ```
/// use shelf::validation::validate_year;
///
/// assert!(validate_year(1965, 2024).is_ok());
/// assert!(validate_year(1000, 2024).is_ok());
/// assert!(validate_year(2024, 2024).is_ok());
///
/// assert!(validate_year(999, 2024).is_err());
/// assert!(validate_year(2025, 2024).is_err());
/// ```
pub fn validate_year(year: i32, current_year: i32) -> Result<i32, ValidationError> {
    if (MIN_YEAR..=current_year).contains(&year) {
        Ok(year)
    } else {
        Err(ValidationError::YearOutOfRange {
            year,
            max: current_year,
        })
    }
}

/// Parses and validates a year typed by a user.
pub fn parse_year(input: &str, current_year: i32) -> Result<i32, ValidationError> {
    let trimmed = input.trim();
    let year: i32 = trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidYear(trimmed.to_string()))?;
    validate_year(year, current_year)
}

/// Parses a `y`/`n` answer, case-insensitively.
pub fn parse_read_status(input: &str) -> Result<bool, ValidationError> {
    match input.trim().to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        other => Err(ValidationError::InvalidReadStatus(other.to_string())),
    }
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

/// Checks every rule a book must satisfy before it enters the collection.
pub fn validate_new_book(book: &NewBook, current_year: i32) -> Result<(), ValidationError> {
    validate_title(&book.title)?;
    validate_year(book.year, current_year)?;
    Ok(())
}

/// Error type for book field validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty or only whitespace
    EmptyTitle,
    /// Year is outside `[MIN_YEAR, max]`
    YearOutOfRange { year: i32, max: i32 },
    /// Year input is not an integer
    InvalidYear(String),
    /// Read status input is neither `y` nor `n`
    InvalidReadStatus(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "title cannot be empty"),
            ValidationError::YearOutOfRange { year, max } => write!(
                f,
                "year {} is out of range, expected a year between {} and {}",
                year, MIN_YEAR, max
            ),
            ValidationError::InvalidYear(input) => {
                write!(f, "'{}' is not a valid number", input)
            }
            ValidationError::InvalidReadStatus(input) => {
                write!(f, "read status must be 'y' or 'n', got '{}'", input)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
