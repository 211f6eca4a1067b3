use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::model::{Book, SearchField};
use crate::store::DataStore;

/// How a search ended. An empty library and a search with no hits are
/// different situations even though neither returns any books.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    EmptyLibrary,
    NoMatches,
    Matches(usize),
}

/// Books whose `field` contains `term`, ignoring case, in insertion order.
pub fn matching<'a>(books: &'a [Book], field: SearchField, term: &str) -> Vec<&'a Book> {
    let term_lower = term.trim().to_lowercase();
    books
        .iter()
        .filter(|b| field.value_of(b).to_lowercase().contains(&term_lower))
        .collect()
}

pub fn run<S: DataStore>(
    library: &Library<S>,
    field: SearchField,
    term: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if library.is_empty() {
        result.add_message(CmdMessage::info("Library is empty!"));
        return Ok(result.with_search(SearchOutcome::EmptyLibrary));
    }

    let found: Vec<Book> = matching(library.books(), field, term)
        .into_iter()
        .cloned()
        .collect();

    if found.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No books found with {} matching \"{}\".",
            field,
            term.trim()
        )));
        return Ok(result.with_search(SearchOutcome::NoMatches));
    }

    let outcome = SearchOutcome::Matches(found.len());
    Ok(result.with_listed_books(found).with_search(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn library() -> Library<InMemoryStore> {
        let store = StoreFixture::new()
            .with_book("Dune", "Frank Herbert")
            .with_book("The Hobbit", "J.R.R. Tolkien")
            .with_book("Children of Dune", "Frank Herbert")
            .with_book("Emma", "Jane Austen")
            .build();
        Library::open(store).0
    }

    fn titles(result: &CmdResult) -> Vec<&str> {
        result
            .listed_books
            .iter()
            .map(|b| b.title.as_str())
            .collect()
    }

    #[test]
    fn title_substring_ignores_case_and_keeps_order() {
        let result = run(&library(), SearchField::Title, "DUNE").unwrap();
        assert_eq!(titles(&result), vec!["Dune", "Children of Dune"]);
        assert_eq!(result.search, Some(SearchOutcome::Matches(2)));
    }

    #[test]
    fn author_search_only_checks_author() {
        let result = run(&library(), SearchField::Author, "herbert").unwrap();
        assert_eq!(titles(&result), vec!["Dune", "Children of Dune"]);

        let none = run(&library(), SearchField::Author, "hobbit").unwrap();
        assert!(none.listed_books.is_empty());
    }

    #[test]
    fn title_search_does_not_check_author() {
        let result = run(&library(), SearchField::Title, "austen").unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.search, Some(SearchOutcome::NoMatches));
    }

    #[test]
    fn absent_term_is_no_matches_not_error() {
        let result = run(&library(), SearchField::Title, "zzz").unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.search, Some(SearchOutcome::NoMatches));
    }

    #[test]
    fn empty_library_is_distinct_from_no_matches() {
        let library = Library::new(InMemoryStore::new());
        let result = run(&library, SearchField::Title, "dune").unwrap();
        assert_eq!(result.search, Some(SearchOutcome::EmptyLibrary));
    }

    #[test]
    fn search_does_not_save() {
        let library = library();
        run(&library, SearchField::Title, "dune").unwrap();
        assert_eq!(library.store().save_count(), 0);
    }
}
