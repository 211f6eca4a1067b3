use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &Library<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match library.store().location() {
        Some(path) => result = result.with_data_path(path.to_path_buf()),
        None => result.add_message(CmdMessage::info("This library is not stored on disk.")),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileStore;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    #[test]
    fn reports_file_location() {
        let library = Library::new(FileStore::new("/tmp/books.json"));
        let result = run(&library).unwrap();
        assert_eq!(result.data_path, Some(PathBuf::from("/tmp/books.json")));
    }

    #[test]
    fn memory_store_has_no_location() {
        let library = Library::new(InMemoryStore::new());
        let result = run(&library).unwrap();
        assert!(result.data_path.is_none());
        assert_eq!(result.messages.len(), 1);
    }
}
