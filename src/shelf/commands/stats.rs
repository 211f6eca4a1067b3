use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::model::Statistics;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &Library<S>) -> Result<CmdResult> {
    let statistics = Statistics::from_books(library.books());
    let mut result = CmdResult::default();
    if statistics.is_empty() {
        result.add_message(CmdMessage::info("Library is empty!"));
    }
    Ok(result.with_statistics(statistics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn three_of_four_read() {
        let store = StoreFixture::new()
            .with_read_book("A", "x")
            .with_read_book("B", "x")
            .with_book("C", "x")
            .with_read_book("D", "x")
            .build();
        let (library, _) = Library::open(store);

        let stats = run(&library).unwrap().statistics.unwrap();
        assert_eq!(stats.total_count, 4);
        assert_eq!(stats.read_count, 3);
        assert_eq!(stats.read_percentage, Some(75.0));
    }

    #[test]
    fn empty_library_has_no_percentage() {
        let library = Library::new(InMemoryStore::new());
        let result = run(&library).unwrap();
        let stats = result.statistics.unwrap();
        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.read_percentage, None);
        assert!(!result.messages.is_empty());
    }
}
