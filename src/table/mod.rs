//! Delimited table files
//!
//! A table file is plain text: an optional header line naming the columns,
//! then one row per line. Fields are joined with the configured delimiter and
//! there is no quoting, so delimiters and line breaks inside values are
//! replaced with spaces on write (see [`escape_field`]).
//!
//! Two read modes are provided and they differ on empty fields:
//! [`read_table`] drops them from the record, while [`TableReader`] keeps
//! every header column and reports empty fields as `""`.

mod escape;
mod parse;
mod reader;
mod stream;
mod writer;

pub use escape::escape_field;
pub use reader::read_table;
pub use stream::{read_table_lazy, TableReader};
pub use writer::{append_table, write_table};
