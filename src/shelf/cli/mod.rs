//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ## Naked Execution (`shelf`)
//!
//! Running `shelf` with no command starts the interactive menu, the classic
//! way to use the tool. Every menu entry has a one-shot subcommand too, which
//! is what scripts and tests use.
//!
//! ## Where the library lives
//!
//! `--file`, then `SHELF_FILE`, then `data-file` from the config, then
//! `./library_data.json`.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting (book blocks, list lines, stats, messages)
//! - `setup`: Argument parsing via clap
//! - `shell`: The interactive menu loop

mod commands;
mod render;
pub mod setup;
mod shell;

pub use commands::run;
