use crate::commands::{CmdMessage, CmdResult};
use crate::library::Library;
use crate::store::DataStore;

/// Saves the library after a mutation, turning a failure into an error notice.
///
/// The mutation itself stays in memory either way. Returns whether the save
/// went through.
pub fn persist<S: DataStore>(library: &mut Library<S>, result: &mut CmdResult) -> bool {
    match library.save() {
        Ok(()) => true,
        Err(e) => {
            result.add_message(CmdMessage::error(format!(
                "Error saving library: {}. Changes are kept in memory only.",
                e
            )));
            false
        }
    }
}

pub fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
