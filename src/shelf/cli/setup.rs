use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "Keep track of the books you own and the ones you've read", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Library file to use (overrides SHELF_FILE and the config)
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Title of the book
        #[arg(short, long)]
        title: String,

        /// Author of the book
        #[arg(short, long, default_value = "")]
        author: String,

        /// Publication year (1000 up to the current year)
        #[arg(short, long)]
        year: String,

        /// Genre
        #[arg(short, long, default_value = "")]
        genre: String,

        /// Mark the book as read
        #[arg(short, long)]
        read: bool,
    },

    /// Remove every book with this title (case-insensitive)
    #[command(alias = "rm", display_order = 2)]
    Remove {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Search books by title, or by author with --author
    #[command(alias = "s", display_order = 3)]
    Search {
        /// Match against the author instead of the title
        #[arg(long)]
        author: bool,

        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// List all books
    #[command(alias = "ls", display_order = 4)]
    List {
        /// Show every field of every book
        #[arg(long)]
        full: bool,
    },

    /// Show reading statistics
    #[command(display_order = 5)]
    Stats,

    /// Print the path to the library file
    #[command(display_order = 6)]
    Path,

    /// Get or set configuration
    #[command(display_order = 7)]
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Start the interactive menu (the default)
    #[command(display_order = 8)]
    Shell,
}
