//! Write-side rows and read-side records

use indexmap::IndexMap;
use serde::Serialize;

use super::value::CellValue;

/// A row to be written: column name to value, in insertion order
pub type Row = IndexMap<String, CellValue>;

/// Build a [`Row`] from key/value pairs
pub fn row<I, K, V>(pairs: I) -> Row
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<CellValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// A row read back from a table file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    /// Header mode: column name to field text
    Named(IndexMap<String, String>),
    /// Headerless mode: raw fields in line order
    Fields(Vec<String>),
}

impl Record {
    /// Field value by column name (always `None` for headerless records)
    pub fn get(&self, column: &str) -> Option<&str> {
        match self {
            Record::Named(map) => map.get(column).map(String::as_str),
            Record::Fields(_) => None,
        }
    }

    /// Number of keys or fields held
    pub fn len(&self) -> usize {
        match self {
            Record::Named(map) => map.len(),
            Record::Fields(fields) => fields.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
