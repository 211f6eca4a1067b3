use crate::commands::{CmdMessage, CmdResult};
use crate::library::{Library, LoadOutcome};
use crate::store::DataStore;

use super::helpers::plural;

/// Reloads from the store. Never fails: a bad file becomes a warning.
pub fn run<S: DataStore>(library: &mut Library<S>) -> CmdResult {
    let outcome = library.load();
    notice(&outcome)
}

/// Turns a load outcome into the notice a UI shows at startup.
pub fn notice(outcome: &LoadOutcome) -> CmdResult {
    let mut result = CmdResult::default();
    match outcome {
        LoadOutcome::Loaded(count) => result.add_message(CmdMessage::info(format!(
            "Library loaded successfully ({}).",
            plural(*count, "book")
        ))),
        LoadOutcome::Missing => {}
        LoadOutcome::Failed(reason) => result.add_message(CmdMessage::warning(format!(
            "Error loading library: {}. Starting with an empty library.",
            reason
        ))),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn loaded_is_info() {
        let mut library = Library::new(StoreFixture::new().with_books(2).build());
        let result = run(&mut library);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.messages[0].content.contains("2 books"));
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn missing_is_silent() {
        let mut library = Library::new(InMemoryStore::new());
        assert!(run(&mut library).messages.is_empty());
    }

    #[test]
    fn failure_is_a_warning_not_an_error() {
        let mut library = Library::new(InMemoryStore::corrupted());
        let result = run(&mut library);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(!result.has_errors());
        assert!(library.is_empty());
    }
}
