use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &Library<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if library.is_empty() {
        result.add_message(CmdMessage::info("Library is empty!"));
    }
    Ok(result.with_listed_books(library.books().to_vec()))
}
