//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Decides exit codes
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call API and format output

use super::render::{render_book_list, render_books, render_messages, render_statistics};
use super::setup::{Cli, Commands};
use super::shell::Shell;
use chrono::Local;
use clap::Parser;
use directories::ProjectDirs;
use shelf::api::{CmdResult, ConfigAction, MessageLevel, ShelfApi};
use shelf::config::{resolve_data_file, ShelfConfig, KEYS};
use shelf::error::{Result, ShelfError};
use shelf::model::{NewBook, SearchField};
use shelf::store::fs::FileStore;
use shelf::validation::{current_year, parse_year};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const FILE_ENV: &str = "SHELF_FILE";
const CONFIG_DIR_ENV: &str = "SHELF_CONFIG_DIR";

struct AppContext {
    api: ShelfApi<FileStore>,
    color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let interactive = matches!(cli.command, None | Some(Commands::Shell));
    let (mut ctx, load_notice) = init_context(&cli)?;

    if interactive {
        print_messages(&load_notice, ctx.color);
    } else {
        // One-shot commands only surface load problems, not the routine notice.
        let problems: Vec<_> = load_notice
            .messages
            .into_iter()
            .filter(|m| m.level != MessageLevel::Info)
            .collect();
        print!("{}", render_messages(&problems, ctx.color));
    }

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        }) => handle_add(&mut ctx, title, author, &year, genre, read),
        Some(Commands::Remove { title }) => handle_remove(&mut ctx, title.join(" ")),
        Some(Commands::Search { author, term }) => {
            let field = if author {
                SearchField::Author
            } else {
                SearchField::Title
            };
            handle_search(&ctx, field, term.join(" "))
        }
        Some(Commands::List { full }) => handle_list(&ctx, full),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Shell) | None => handle_shell(&mut ctx),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Config("Could not determine config dir".to_string()))
}

fn init_context(cli: &Cli) -> Result<(AppContext, CmdResult)> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = config_dir()?;
    let config = ShelfConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        ShelfConfig::default()
    });

    let data_file = resolve_data_file(
        cli.file.clone(),
        std::env::var_os(FILE_ENV).map(PathBuf::from),
        &config,
        &cwd,
    );
    tracing::debug!(path = %data_file.display(), "using library file");

    let (api, notice) = ShelfApi::open(FileStore::new(data_file), config_dir);
    let color = std::io::stdout().is_terminal();
    Ok((AppContext { api, color }, notice))
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    author: String,
    year: &str,
    genre: String,
    read: bool,
) -> Result<()> {
    let year = parse_year(year, current_year())?;
    let result = ctx
        .api
        .add_book(NewBook::new(title, author, year, genre, read))?;
    finish(&result, ctx.color)
}

fn handle_remove(ctx: &mut AppContext, title: String) -> Result<()> {
    let result = ctx.api.remove_books(&title)?;
    finish(&result, ctx.color)
}

fn handle_search(ctx: &AppContext, field: SearchField, term: String) -> Result<()> {
    let result = ctx.api.search_books(field, &term)?;
    if !result.listed_books.is_empty() {
        print!("{}", render_book_list(&result.listed_books, ctx.color));
    }
    finish(&result, ctx.color)
}

fn handle_list(ctx: &AppContext, full: bool) -> Result<()> {
    let result = ctx.api.list_books()?;
    if !result.listed_books.is_empty() {
        if full {
            let today = Local::now().date_naive();
            print!("{}", render_books(&result.listed_books, today, ctx.color));
        } else {
            print!("{}", render_book_list(&result.listed_books, ctx.color));
        }
    }
    finish(&result, ctx.color)
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.statistics()?;
    if let Some(stats) = &result.statistics {
        if !stats.is_empty() {
            print!("{}", render_statistics(stats, ctx.color));
        }
    }
    finish(&result, ctx.color)
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.data_path()?;
    if let Some(path) = &result.data_path {
        println!("{}", path.display());
    }
    finish(&result, ctx.color)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in KEYS {
                if let Some(value) = config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
    }
    finish(&result, ctx.color)
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(&mut ctx.api, stdin.lock(), stdout.lock(), ctx.color).run()
}

fn print_messages(result: &CmdResult, color: bool) {
    print!("{}", render_messages(&result.messages, color));
}

/// Prints non-error messages and turns the first error message into an `Err`,
/// so `main` reports it on stderr and exits non-zero.
fn finish(result: &CmdResult, color: bool) -> Result<()> {
    let (errors, others): (Vec<_>, Vec<_>) = result
        .messages
        .iter()
        .cloned()
        .partition(|m| m.level == MessageLevel::Error);
    print!("{}", render_messages(&others, color));

    match errors.into_iter().next() {
        Some(err) => Err(ShelfError::Command(err.content)),
        None => Ok(()),
    }
}
