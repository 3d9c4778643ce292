//! Data model for rows, records and column sets

mod columns;
mod record;
mod value;

pub use columns::ColumnSet;
pub use record::{row, Record, Row};
pub use value::CellValue;
