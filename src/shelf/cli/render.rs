//! # Rendering Module
//!
//! Every function here returns a `String`; printing is left to the callers.
//! Colour is an explicit argument so tests can render plain text.
//!
//! Layout calculations (width, truncation, padding) use `unicode-width` so
//! titles with wide characters still line up.

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use shelf::api::{CmdMessage, MessageLevel};
use shelf::model::{Book, Statistics};
use unicode_width::UnicodeWidthStr;

/// Configuration for list rendering.
pub const LINE_WIDTH: usize = 100;
pub const YEAR_WIDTH: usize = 6;
pub const READ_MARKER: &str = "✓";

const SEPARATOR: &str = "-------------------";

fn paint(text: &str, color: bool, style: fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Renders books as labelled blocks, one field per line.
pub fn render_books(books: &[Book], today: NaiveDate, color: bool) -> String {
    books
        .iter()
        .map(|b| render_book(b, today, color))
        .collect()
}

pub fn render_book(book: &Book, today: NaiveDate, color: bool) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&paint(SEPARATOR, color, |s| s.dimmed()));
    out.push('\n');
    out.push_str(&format!("Title: {}\n", paint(&book.title, color, |s| s.bold())));
    out.push_str(&format!("Author: {}\n", book.author));
    out.push_str(&format!("Year: {}\n", book.year));
    out.push_str(&format!("Genre: {}\n", book.genre));
    out.push_str(&format!("Read: {}\n", if book.read { "Yes" } else { "No" }));
    out.push_str(&format!(
        "Date Added: {} {}\n",
        book.date_added,
        paint(&format!("({})", added_ago(book.date_added, today)), color, |s| {
            s.dimmed()
        })
    ));
    out
}

/// Renders one compact, width-limited line per book.
pub fn render_book_list(books: &[Book], color: bool) -> String {
    if books.is_empty() {
        return "No books found.\n".to_string();
    }

    let index_width = books.len().to_string().len();
    let mut out = String::new();

    for (i, book) in books.iter().enumerate() {
        let idx_str = format!("{:>width$}. ", i + 1, width = index_width);
        let marker = if book.read { READ_MARKER } else { " " };
        let year = format!("{:>width$}", book.year, width = YEAR_WIDTH);

        let label = if book.author.is_empty() {
            book.title.clone()
        } else {
            format!("{} by {}", book.title, book.author)
        };

        let fixed_width = 2 + idx_str.width() + marker.width() + 1 + YEAR_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let label_display = truncate_to_width(&label, available);
        let padding = " ".repeat(available.saturating_sub(label_display.width()));

        out.push_str(&format!(
            "  {}{}{}{} {}\n",
            paint(&idx_str, color, |s| s.yellow()),
            label_display,
            padding,
            paint(&year, color, |s| s.dimmed()),
            paint(marker, color, |s| s.green()),
        ));
    }

    out
}

pub fn render_statistics(stats: &Statistics, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&paint("\n=== Library Statistics ===", color, |s| s.bold()));
    out.push('\n');
    out.push_str(&format!("Total books: {}\n", stats.total_count));
    out.push_str(&format!("Books read: {}\n", stats.read_count));
    match stats.read_percentage {
        Some(pct) => out.push_str(&format!("Percentage read: {:.1}%\n", pct)),
        None => out.push_str("Percentage read: n/a\n"),
    }
    out
}

/// Renders command messages, one per line, coloured by level.
pub fn render_messages(messages: &[CmdMessage], color: bool) -> String {
    messages
        .iter()
        .map(|msg| {
            let line = match msg.level {
                MessageLevel::Info => paint(&msg.content, color, |s| s.dimmed()),
                MessageLevel::Success => paint(&msg.content, color, |s| s.green()),
                MessageLevel::Warning => paint(&msg.content, color, |s| s.yellow()),
                MessageLevel::Error => paint(&msg.content, color, |s| s.red()),
            };
            format!("{}\n", line)
        })
        .collect()
}

fn added_ago(date_added: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date_added).num_days();
    if days <= 0 {
        return "today".to_string();
    }
    let formatter = timeago::Formatter::new();
    formatter.convert(std::time::Duration::from_secs(days as u64 * 86_400))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn dune() -> Book {
        Book::new(
            "Dune".into(),
            "Frank Herbert".into(),
            1965,
            "Sci-Fi".into(),
            true,
            day(9),
        )
    }

    #[test]
    fn book_block_lists_every_field() {
        let out = render_book(&dune(), day(9), false);
        assert!(out.contains("Title: Dune\n"));
        assert!(out.contains("Author: Frank Herbert\n"));
        assert!(out.contains("Year: 1965\n"));
        assert!(out.contains("Genre: Sci-Fi\n"));
        assert!(out.contains("Read: Yes\n"));
        assert!(out.contains("Date Added: 2024-03-09 (today)\n"));
    }

    #[test]
    fn book_block_shows_relative_age() {
        let out = render_book(&dune(), day(12), false);
        assert!(out.contains("3 days ago"), "got: {}", out);
    }

    #[test]
    fn list_lines_have_index_label_and_marker() {
        let mut unread = dune();
        unread.title = "Children of Dune".into();
        unread.read = false;
        let out = render_book_list(&[dune(), unread], false);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1. Dune by Frank Herbert"));
        assert!(lines[0].ends_with("1965 ✓"));
        assert!(lines[1].ends_with("1965  "));
        assert_eq!(lines[0].width(), LINE_WIDTH);
    }

    #[test]
    fn list_truncates_long_titles() {
        let mut long = dune();
        long.title = "A".repeat(200);
        let out = render_book_list(&[long], false);
        assert!(out.contains('…'));
        assert_eq!(out.trim_end_matches('\n').width(), LINE_WIDTH);
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(render_book_list(&[], false), "No books found.\n");
    }

    #[test]
    fn statistics_with_one_decimal() {
        let stats = Statistics {
            total_count: 4,
            read_count: 3,
            read_percentage: Some(75.0),
        };
        let out = render_statistics(&stats, false);
        assert!(out.contains("Total books: 4"));
        assert!(out.contains("Books read: 3"));
        assert!(out.contains("Percentage read: 75.0%"));
    }

    #[test]
    fn statistics_without_percentage() {
        let out = render_statistics(&Statistics::from_books(&[]), false);
        assert!(out.contains("Percentage read: n/a"));
    }

    #[test]
    fn messages_plain() {
        let out = render_messages(
            &[CmdMessage::success("Saved"), CmdMessage::error("Oops")],
            false,
        );
        assert_eq!(out, "Saved\nOops\n");
    }
}
