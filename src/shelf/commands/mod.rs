//! # Command Layer
//!
//! One module per operation. Commands take a [`Library`](crate::library::Library)
//! and plain Rust arguments, and return a [`CmdResult`]. They never print;
//! user-facing notices travel as [`CmdMessage`]s for the UI to render.
//!
//! Every mutating command persists through [`helpers::persist`] before it
//! returns. Read-only commands never touch the store.

use crate::config::ShelfConfig;
use crate::model::{Book, Statistics};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod helpers;
pub mod list;
pub mod load;
pub mod paths;
pub mod remove;
pub mod save;
pub mod search;
pub mod stats;

pub use search::SearchOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub statistics: Option<Statistics>,
    pub search: Option<SearchOutcome>,
    pub data_path: Option<PathBuf>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn with_search(mut self, outcome: SearchOutcome) -> Self {
        self.search = Some(outcome);
        self
    }

    pub fn with_data_path(mut self, path: PathBuf) -> Self {
        self.data_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when any message is an error, e.g. a mutation that could not be saved.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
