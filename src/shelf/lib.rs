//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic personal library manager**. It keeps a list of books
//! in memory and mirrors it to a single JSON file. The binary ships two UIs on
//! top of the same core: one-shot subcommands and an interactive menu shell.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, remove, search, list, stats, save, load, config     │
//! │  - Validation is enforced here, not only in the shell       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (library.rs) over Storage (store/)            │
//! │  - In-memory collection, explicit load/save                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** reads from an interactive source
//!
//! File I/O happens only at the explicit load and save boundaries of
//! [`library::Library`]. A failed load is never fatal: the library starts
//! empty and the caller gets a notice.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`library`]: The record store
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Book`, `NewBook`, `Statistics`)
//! - [`validation`]: Pure field validation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod library;
pub mod model;
pub mod store;
pub mod validation;
