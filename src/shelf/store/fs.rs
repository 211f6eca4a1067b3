use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "library_data.json";

const INDENT: &[u8] = b"    ";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

/// Serializes books as JSON with four-space indentation.
pub fn to_json(books: &[Book]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    books
        .serialize(&mut ser)
        .map_err(ShelfError::Serialization)?;
    String::from_utf8(buf).map_err(|e| ShelfError::Api(format!("Invalid UTF-8 output: {}", e)))
}

impl DataStore for FileStore {
    fn load_books(&self) -> Result<Option<Vec<Book>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        if content.trim().is_empty() {
            return Ok(Some(Vec::new()));
        }
        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(Some(books))
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_parent()?;
        let content = to_json(books)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(ShelfError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ShelfError::Io(e));
        }
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
