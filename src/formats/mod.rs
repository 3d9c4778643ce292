//! Structured file formats backed by serde

mod json;
mod yaml;

pub use self::json::{read_json, write_json};
pub use self::yaml::{read_yaml, write_yaml};

/// Result type for structured format helpers
pub type Result<T> = std::result::Result<T, crate::error::FormatError>;
