//! Line splitting and record reconstruction shared by both read modes

use indexmap::IndexMap;

use crate::error::{Result, TableError};
use crate::model::{CellValue, Record, Row};

use super::escape::escape_field;

/// What to do with empty fields when building a named record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EmptyFields {
    /// Leave the column out of the record
    Drop,
    /// Keep the column with an empty string
    Keep,
}

pub(crate) fn split_fields(line: &str, delimiter: &str) -> Vec<String> {
    line.split(delimiter).map(str::to_string).collect()
}

/// Pair `fields` with `columns`, failing when the widths differ
pub(crate) fn named_record(
    columns: &[String],
    fields: Vec<String>,
    line: &str,
    empty: EmptyFields,
) -> Result<Record> {
    if fields.len() != columns.len() {
        return Err(TableError::RowWidthMismatch {
            expected: columns.len(),
            actual: fields.len(),
            line: line.to_string(),
        });
    }

    let map: IndexMap<String, String> = columns
        .iter()
        .zip(fields)
        .filter(|(_, field)| empty == EmptyFields::Keep || !field.is_empty())
        .map(|(column, field)| (column.clone(), field))
        .collect();
    Ok(Record::Named(map))
}

/// Render one row as a line of escaped fields in `columns` order
///
/// Missing and null values become empty fields.
pub(crate) fn format_row<'a, I>(record: &Row, columns: I, delimiter: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    columns
        .into_iter()
        .map(|column| {
            record
                .get(column)
                .and_then(CellValue::as_field)
                .map(|value| escape_field(&value, delimiter).into_owned())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(delimiter)
}
