//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every shelf operation, whichever UI is driving it: the
//! one-shot subcommands and the interactive shell both go through here.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O to the user**: No stdout, stderr, or prompting
//! - **Presentation**: Returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `ShelfApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::library::Library;
use crate::model::{Book, NewBook, SearchField};
use crate::store::DataStore;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// The main API facade for shelf operations.
pub struct ShelfApi<S: DataStore> {
    library: Library<S>,
    config_dir: PathBuf,
}

impl<S: DataStore> ShelfApi<S> {
    /// Wraps an already-loaded library.
    pub fn new(library: Library<S>, config_dir: PathBuf) -> Self {
        Self {
            library,
            config_dir,
        }
    }

    /// Opens `store`, loading whatever it holds. The returned result carries
    /// the load notice; a failed load still yields a usable, empty API.
    pub fn open(store: S, config_dir: PathBuf) -> (Self, commands::CmdResult) {
        let (library, outcome) = Library::open(store);
        (Self::new(library, config_dir), commands::load::notice(&outcome))
    }

    pub fn add_book(&mut self, new_book: NewBook) -> Result<commands::CmdResult> {
        self.add_book_on(new_book, today())
    }

    /// Like [`ShelfApi::add_book`] with an explicit `date_added`.
    pub fn add_book_on(
        &mut self,
        new_book: NewBook,
        date_added: NaiveDate,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.library, new_book, date_added)
    }

    pub fn remove_books(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.library, title)
    }

    pub fn search_books(&self, field: SearchField, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.library, field, term)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.library)
    }

    pub fn statistics(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.library)
    }

    pub fn save(&mut self) -> commands::CmdResult {
        commands::save::run(&mut self.library)
    }

    pub fn reload(&mut self) -> commands::CmdResult {
        commands::load::run(&mut self.library)
    }

    pub fn data_path(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.library)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn books(&self) -> &[Book] {
        self.library.books()
    }

    pub fn is_empty(&self) -> bool {
        self.library.is_empty()
    }

    pub fn library(&self) -> &Library<S> {
        &self.library
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, SearchOutcome};
