use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid book: {0}")]
    Validation(#[from] ValidationError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),

    /// A command ran but reported failure, e.g. a mutation that was not saved.
    #[error("{0}")]
    Command(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
