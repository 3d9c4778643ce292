//! fsutils - Small file I/O helpers
//!
//! Listing files, whole-file text and byte I/O, line I/O, JSON and YAML
//! documents, and delimited tables with header inference and heterogeneous
//! rows.

pub mod config;
pub mod error;
pub mod formats;
pub mod fs;
pub mod model;
pub mod output;
pub mod table;

pub use config::TableOptions;
pub use error::{FormatError, TableError};
pub use model::{row, CellValue, ColumnSet, Record, Row};
pub use table::{append_table, escape_field, read_table, read_table_lazy, write_table, TableReader};
