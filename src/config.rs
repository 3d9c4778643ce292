//! Configuration for table reads and writes

use crate::error::{Result, TableError};

/// Default field separator
pub const DEFAULT_DELIMITER: &str = "\t";

/// Output format for records printed by the CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    JsonLines,
}

/// Options shared by every table operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Separator placed between fields
    pub delimiter: String,
    /// Whether the first line of the file names the columns
    pub has_header: bool,
    /// Lines starting with this prefix are skipped by buffered reads
    pub comment_prefix: Option<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            has_header: true,
            comment_prefix: None,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field separator
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Enable or disable the header line
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the comment prefix for buffered reads
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = Some(prefix.into());
        self
    }

    /// Reject options no table operation can honor
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(TableError::EmptyDelimiter);
        }
        Ok(())
    }

    /// Comment prefix, ignoring an empty string
    pub(crate) fn comment_prefix(&self) -> Option<&str> {
        self.comment_prefix.as_deref().filter(|p| !p.is_empty())
    }
}
