//! Incremental table reads

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

use crate::config::TableOptions;
use crate::error::Result;
use crate::fs::strip_line_end;
use crate::model::Record;

use super::parse::{named_record, split_fields, EmptyFields};

/// Open `path` for incremental reading
pub fn read_table_lazy(path: &Path, options: &TableOptions) -> Result<TableReader> {
    TableReader::open(path, options)
}

/// Reads a table one line at a time
///
/// Unlike [`read_table`](super::read_table), named records always contain
/// every header column, with `""` for empty fields. Comment lines are not
/// filtered. The first empty line ends the table, even if more lines follow.
/// Lines end at `\n` (a preceding `\r` is stripped); a lone `\r` does not
/// split a line here, whereas [`read_table`](super::read_table) treats it as
/// a line ending.
///
/// The reader owns the file handle. It is released as soon as the table is
/// exhausted or an error is returned, when the reader is dropped, or by
/// [`TableReader::close`].
pub struct TableReader<R = BufReader<File>> {
    reader: Option<R>,
    delimiter: String,
    columns: Option<Vec<String>>,
    line: String,
    rows_read: usize,
}

impl TableReader {
    /// Open a fresh reader positioned at the top of `path`
    pub fn open(path: &Path, options: &TableOptions) -> Result<Self> {
        options.validate()?;
        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "opened table for incremental read");
        Self::from_reader(BufReader::new(file), options)
    }
}

impl<R: BufRead> TableReader<R> {
    /// Wrap any buffered source; the header is consumed immediately
    pub fn from_reader(reader: R, options: &TableOptions) -> Result<Self> {
        options.validate()?;
        if options.comment_prefix().is_some() {
            tracing::debug!("comment prefix is not applied to incremental reads");
        }

        let mut this = Self {
            reader: Some(reader),
            delimiter: options.delimiter.clone(),
            columns: None,
            line: String::new(),
            rows_read: 0,
        };
        if options.has_header {
            if let Some(header) = this.next_line()? {
                this.columns = Some(split_fields(&header, &this.delimiter));
            }
        }
        Ok(this)
    }

    /// Header columns, `None` when reading without a header
    pub fn columns(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }

    /// Whether the underlying handle has been released
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    /// Release the file handle without reading further
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.reader.take().is_some() {
            tracing::trace!(rows = self.rows_read, "released table reader");
        }
    }

    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };
        self.line.clear();
        if reader.read_line(&mut self.line)? == 0 {
            self.release();
            return Ok(None);
        }
        Ok(Some(strip_line_end(&self.line).to_string()))
    }
}

impl<R: BufRead> Iterator for TableReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => return None,
            Err(err) => {
                self.release();
                return Some(Err(err.into()));
            }
        };
        if line.is_empty() {
            self.release();
            return None;
        }

        let fields = split_fields(&line, &self.delimiter);
        let record = match &self.columns {
            Some(columns) => named_record(columns, fields, &line, EmptyFields::Keep),
            None => Ok(Record::Fields(fields)),
        };
        match record {
            Ok(record) => {
                self.rows_read += 1;
                Some(Ok(record))
            }
            Err(err) => {
                self.release();
                Some(Err(err))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for TableReader<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;
    use crate::fs::write_file;
    use crate::model::{row, CellValue};
    use crate::table::write_table;
    use indexmap::IndexMap;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn named(pairs: &[(&str, &str)]) -> Record {
        Record::Named(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<IndexMap<_, _>>(),
        )
    }

    #[test]
    fn test_incremental_keeps_every_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.tsv");
        let records = vec![
            row([("a", CellValue::from(1)), ("b", CellValue::from("x"))]),
            row([("a", CellValue::from(2)), ("c", CellValue::from("y"))]),
        ];
        write_table(&records, &path, &[] as &[&str], &TableOptions::default()).unwrap();

        let reader = read_table_lazy(&path, &TableOptions::default()).unwrap();
        assert_eq!(reader.columns(), Some(&["a".to_string(), "b".into(), "c".into()][..]));
        let rows: Vec<Record> = reader.collect::<Result<_>>().unwrap();
        assert_eq!(
            rows,
            vec![
                named(&[("a", "1"), ("b", "x"), ("c", "")]),
                named(&[("a", "2"), ("b", ""), ("c", "y")]),
            ]
        );
    }

    #[test]
    fn test_blank_line_ends_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.tsv");
        write_file("a\tb\n1\t2\n\n3\t4\n", &path).unwrap();
        let mut reader = TableReader::open(&path, &TableOptions::default()).unwrap();
        assert_eq!(reader.next().unwrap().unwrap(), named(&[("a", "1"), ("b", "2")]));
        assert!(reader.next().is_none());
        assert!(reader.is_closed());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_restart_reads_from_top() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.tsv");
        write_file("a\n1\n2\n", &path).unwrap();
        let options = TableOptions::default();

        let mut first = TableReader::open(&path, &options).unwrap();
        assert_eq!(first.next().unwrap().unwrap().get("a"), Some("1"));

        let second: Vec<Record> = TableReader::open(&path, &options)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(second[0].get("a"), Some("1"));

        assert_eq!(first.next().unwrap().unwrap().get("a"), Some("2"));
        first.close();
    }

    #[test]
    fn test_width_mismatch_stops_iteration() {
        let source = Cursor::new("a\tb\tc\n1\t2\n4\t5\t6\n");
        let mut reader = TableReader::from_reader(source, &TableOptions::default()).unwrap();
        match reader.next() {
            Some(Err(TableError::RowWidthMismatch { expected, actual, line })) => {
                assert_eq!((expected, actual), (3, 2));
                assert_eq!(line, "1\t2");
            }
            other => panic!("unexpected item: {other:?}"),
        }
        assert!(reader.is_closed());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_headerless_fields() {
        let source = Cursor::new("1\t\tx\r\n2\n");
        let options = TableOptions::default().with_header(false);
        let reader = TableReader::from_reader(source, &options).unwrap();
        assert_eq!(reader.columns(), None);
        let rows: Vec<Record> = reader.collect::<Result<_>>().unwrap();
        assert_eq!(
            rows,
            vec![
                Record::Fields(vec!["1".into(), String::new(), "x".into()]),
                Record::Fields(vec!["2".into()]),
            ]
        );
    }

    #[test]
    fn test_comment_lines_are_not_filtered() {
        let source = Cursor::new("a\n##note\n1\n");
        let options = TableOptions::default().with_comment_prefix("##");
        let rows: Vec<Record> = TableReader::from_reader(source, &options)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(rows, vec![named(&[("a", "##note")]), named(&[("a", "1")])]);
    }

    #[test]
    fn test_empty_source() {
        let mut reader =
            TableReader::from_reader(Cursor::new(""), &TableOptions::default()).unwrap();
        assert_eq!(reader.columns(), None);
        assert!(reader.is_closed());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let err = TableReader::open(&dir.path().join("none.tsv"), &TableOptions::default())
            .err()
            .unwrap();
        assert!(matches!(err, TableError::Io(_)));
    }
}
