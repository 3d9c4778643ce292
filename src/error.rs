//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the table codec
#[derive(Error, Debug)]
pub enum TableError {
    /// A data row does not have one field per header column
    #[error(
        "Malformed row: there are {expected} columns in header, but the following line has {actual} columns.\n{line}"
    )]
    RowWidthMismatch {
        expected: usize,
        actual: usize,
        line: String,
    },

    /// An appended row names a column the existing header does not have
    #[error("Invalid column {0} found")]
    InvalidColumn(String),

    #[error("No header line in {}", .0.display())]
    MissingHeader(PathBuf),

    #[error("Delimiter must not be empty")]
    EmptyDelimiter,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors raised by the JSON and YAML helpers
#[derive(Error, Debug)]
pub enum FormatError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
