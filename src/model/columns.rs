//! Ordered column sets

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use super::record::Row;

/// Ordered, de-duplicated column names
///
/// Names keep the position at which they were first inserted; inserting a
/// name that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    names: IndexSet<String, FxBuildHasher>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column set seeded from an explicit list
    pub fn from_seed<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for name in seed {
            set.insert(name);
        }
        set
    }

    /// Union of the seed and every row's keys, in first-seen order
    pub fn discover<S: AsRef<str>>(seed: &[S], records: &[Row]) -> Self {
        let mut set = Self::from_seed(seed.iter().map(|s| s.as_ref().to_string()));
        for record in records {
            set.extend_from_row(record);
        }
        set
    }

    /// Append a name if it is not already present
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Append every key of `row` that is not already present
    pub fn extend_from_row(&mut self, row: &Row) {
        for key in row.keys() {
            if !self.names.contains(key.as_str()) {
                self.names.insert(key.clone());
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Header line text: names joined with `delimiter`
    pub fn join(&self, delimiter: &str) -> String {
        self.iter().collect::<Vec<_>>().join(delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{row, CellValue};

    fn names(set: &ColumnSet) -> Vec<&str> {
        set.iter().collect()
    }

    #[test]
    fn test_discover_first_seen_order() {
        let records = vec![
            row([("a", CellValue::from(1)), ("b", CellValue::from("x"))]),
            row([("a", CellValue::from(2)), ("c", CellValue::from("y"))]),
        ];
        let set = ColumnSet::discover::<&str>(&[], &records);
        assert_eq!(names(&set), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_discover_seed_comes_first() {
        let records = vec![
            row([("c", CellValue::from(1)), ("a", CellValue::from(2))]),
            row([("d", CellValue::Null)]),
        ];
        let set = ColumnSet::discover(&["z", "a"], &records);
        assert_eq!(names(&set), vec!["z", "a", "c", "d"]);
    }

    #[test]
    fn test_seed_duplicates_collapse() {
        let set = ColumnSet::from_seed(["a", "b", "a"]);
        assert_eq!(names(&set), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_discovery() {
        let set = ColumnSet::discover::<String>(&[], &[]);
        assert!(set.is_empty());
        assert_eq!(set.join("\t"), "");
    }

    #[test]
    fn test_join() {
        let set = ColumnSet::from_seed(["a", "b", "c"]);
        assert_eq!(set.join("\t"), "a\tb\tc");
        assert_eq!(set.join(", "), "a, b, c");
        assert!(set.contains("b"));
        assert!(!set.contains("d"));
    }
}
