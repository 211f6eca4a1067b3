use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::model::NewBook;
use crate::store::DataStore;
use crate::validation::validate_new_book;
use chrono::{Datelike, NaiveDate};

use super::helpers::persist;

/// Validates `new_book`, appends it stamped with `today`, and saves.
///
/// Invalid input is rejected with [`crate::error::ShelfError::Validation`]
/// before anything is touched. Duplicates are allowed.
pub fn run<S: DataStore>(
    library: &mut Library<S>,
    new_book: NewBook,
    today: NaiveDate,
) -> Result<CmdResult> {
    validate_new_book(&new_book, today.year())?;

    let book = new_book.into_book(today);
    library.push(book.clone());

    let mut result = CmdResult::default();
    if persist(library, &mut result) {
        result.add_message(CmdMessage::success(format!(
            "Book added successfully: {}",
            book.title
        )));
    }
    Ok(result.with_affected_books(vec![book]))
}
