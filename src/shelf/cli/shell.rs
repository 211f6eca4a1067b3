//! The interactive menu.
//!
//! The shell owns the re-prompt loops: it keeps asking until a year or a y/n
//! answer passes validation, then hands clean values to the API. It is
//! generic over its input and output so tests can script a whole session.
//!
//! End of input behaves like choosing Exit: the library is saved once more.

use super::render::{render_books, render_messages, render_statistics};
use chrono::{Datelike, Local, NaiveDate};
use shelf::api::{CmdResult, SearchOutcome, ShelfApi};
use shelf::error::{Result, ShelfError};
use shelf::model::{NewBook, SearchField};
use shelf::store::DataStore;
use shelf::validation::{self, ValidationError, MIN_YEAR};
use std::io::{BufRead, Write};

const MENU: &str = "\n=== Personal Library Manager ===
1. Add a book
2. Remove a book
3. Search for a book
4. Display all books
5. Display statistics
6. Exit
";

enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut ShelfApi<S>,
    input: R,
    output: W,
    color: bool,
    today: NaiveDate,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(api: &'a mut ShelfApi<S>, input: R, output: W, color: bool) -> Self {
        Self {
            api,
            input,
            output,
            color,
            today: Local::now().date_naive(),
        }
    }

    #[cfg(test)]
    fn on(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn run(mut self) -> Result<()> {
        loop {
            self.write(MENU)?;
            let Some(choice) = self.prompt("\nEnter your choice (1-6): ")? else {
                return self.exit();
            };

            let flow = match choice.as_str() {
                "1" => self.add_book()?,
                "2" => self.remove_book()?,
                "3" => self.search_books()?,
                "4" => self.display_all()?,
                "5" => self.display_statistics()?,
                "6" => return self.exit(),
                _ => {
                    self.write("\nInvalid choice! Please try again.\n")?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                return self.exit();
            }
        }
    }

    fn add_book(&mut self) -> Result<Flow> {
        self.write("\n=== Add New Book ===\n")?;

        let title = loop {
            let Some(title) = self.prompt("Enter title: ")? else {
                return Ok(Flow::Quit);
            };
            match validation::validate_title(&title) {
                Ok(()) => break title,
                Err(_) => self.write("Title cannot be empty\n")?,
            }
        };
        let Some(author) = self.prompt("Enter author: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(year) = self.prompt_year()? else {
            return Ok(Flow::Quit);
        };
        let Some(genre) = self.prompt("Enter genre: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(read) = self.prompt_read_status()? else {
            return Ok(Flow::Quit);
        };

        let new_book = NewBook::new(title, author, year, genre, read);
        match self.api.add_book_on(new_book, self.today) {
            Ok(result) => self.show(&result)?,
            Err(e) => self.write(&format!("\nCould not add book: {}\n", e))?,
        }
        Ok(Flow::Continue)
    }

    fn prompt_year(&mut self) -> Result<Option<i32>> {
        let current_year = self.today.year();
        loop {
            let Some(input) = self.prompt("Enter publication year: ")? else {
                return Ok(None);
            };
            match validation::parse_year(&input, current_year) {
                Ok(year) => return Ok(Some(year)),
                Err(ValidationError::InvalidYear(_)) => {
                    self.write("Please enter a valid number\n")?
                }
                Err(_) => self.write(&format!(
                    "Please enter a valid year between {} and {}\n",
                    MIN_YEAR, current_year
                ))?,
            }
        }
    }

    fn prompt_read_status(&mut self) -> Result<Option<bool>> {
        loop {
            let Some(input) = self.prompt("Has the book been read? (y/n): ")? else {
                return Ok(None);
            };
            match validation::parse_read_status(&input) {
                Ok(read) => return Ok(Some(read)),
                Err(_) => self.write("Please enter 'y' or 'n'\n")?,
            }
        }
    }

    fn remove_book(&mut self) -> Result<Flow> {
        if self.api.is_empty() {
            self.write("\nLibrary is empty!\n")?;
            return Ok(Flow::Continue);
        }

        self.write("\n=== Remove Book ===\n")?;
        let Some(title) = self.prompt("Enter the title of the book to remove: ")? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.remove_books(&title)?;
        self.show(&result)?;
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> Result<Flow> {
        if self.api.is_empty() {
            self.write("\nLibrary is empty!\n")?;
            return Ok(Flow::Continue);
        }

        let field = loop {
            self.write("\n=== Search Books ===\n1. Search by title\n2. Search by author\n")?;
            let Some(choice) = self.prompt("Enter your choice (1/2): ")? else {
                return Ok(Flow::Quit);
            };
            match choice.as_str() {
                "1" => break SearchField::Title,
                "2" => break SearchField::Author,
                _ => self.write("Invalid choice! Please enter 1 or 2.\n")?,
            }
        };

        let Some(term) = self.prompt("Enter search term: ")? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.search_books(field, &term)?;
        if let Some(SearchOutcome::Matches(_)) = result.search {
            self.write("\nFound Books:\n")?;
            let books = render_books(&result.listed_books, self.today, self.color);
            self.write(&books)?;
        } else {
            self.show(&result)?;
        }
        Ok(Flow::Continue)
    }

    fn display_all(&mut self) -> Result<Flow> {
        let result = self.api.list_books()?;
        if result.listed_books.is_empty() {
            self.show(&result)?;
        } else {
            self.write("\n=== All Books ===\n")?;
            let books = render_books(&result.listed_books, self.today, self.color);
            self.write(&books)?;
        }
        Ok(Flow::Continue)
    }

    fn display_statistics(&mut self) -> Result<Flow> {
        let result = self.api.statistics()?;
        match result.statistics {
            Some(stats) if !stats.is_empty() => {
                let text = render_statistics(&stats, self.color);
                self.write(&text)?
            }
            _ => self.show(&result)?,
        }
        Ok(Flow::Continue)
    }

    fn exit(mut self) -> Result<()> {
        let result = self.api.save();
        self.show(&result)?;
        self.write("\nThank you for using Personal Library Manager!\n")?;
        Ok(())
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        if result.messages.is_empty() {
            return Ok(());
        }
        let text = format!("\n{}", render_messages(&result.messages, self.color));
        self.write(&text)
    }

    /// Prints `label` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        self.write(label)?;
        self.output.flush().map_err(ShelfError::Io)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(ShelfError::Io)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .map_err(ShelfError::Io)
    }
}
