use crate::commands::{CmdMessage, CmdResult};
use crate::library::Library;
use crate::store::DataStore;

use super::helpers::persist;

/// Explicit save, used by the interactive shell on exit.
pub fn run<S: DataStore>(library: &mut Library<S>) -> CmdResult {
    let mut result = CmdResult::default();
    if persist(library, &mut result) {
        result.add_message(CmdMessage::success("Library saved successfully!"));
    }
    result
}
