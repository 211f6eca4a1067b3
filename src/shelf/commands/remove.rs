use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::DataStore;

use super::helpers::{persist, plural};

/// Removes every book whose title matches `title`, ignoring case.
///
/// Saves only when something was removed. An empty library or a title with
/// no match is reported, not treated as an error.
pub fn run<S: DataStore>(library: &mut Library<S>, title: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if library.is_empty() {
        result.add_message(CmdMessage::info("Library is empty!"));
        return Ok(result);
    }

    let title = title.trim();
    let removed = library.remove_by_title(title);
    if removed.is_empty() {
        result.add_message(CmdMessage::warning(format!("Book not found: {}", title)));
        return Ok(result);
    }

    if persist(library, &mut result) {
        result.add_message(CmdMessage::success(format!(
            "Removed {}: {}",
            plural(removed.len(), "book"),
            removed[0].title
        )));
    }
    Ok(result.with_affected_books(removed))
}
