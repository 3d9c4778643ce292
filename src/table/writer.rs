//! Buffered table writes and appends

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::config::TableOptions;
use crate::error::{Result, TableError};
use crate::fs;
use crate::model::{ColumnSet, Row};

use super::parse::{format_row, split_fields};

/// Write `records` to `path`, replacing any existing file
///
/// Columns are `col_names` followed by every other key in the order rows
/// first mention it. Missing and null values are written as empty fields.
/// The file is created (with its parent directories) even when `records` is
/// empty.
pub fn write_table<S: AsRef<str>>(
    records: &[Row],
    path: &Path,
    col_names: &[S],
    options: &TableOptions,
) -> Result<()> {
    options.validate()?;
    let columns = ColumnSet::discover(col_names, records);
    tracing::debug!(
        path = %path.display(),
        columns = columns.len(),
        rows = records.len(),
        "writing table"
    );

    let mut writer = BufWriter::new(fs::create_file(path)?);
    if options.has_header {
        writeln!(writer, "{}", columns.join(&options.delimiter))?;
    }
    for record in records {
        writeln!(writer, "{}", format_row(record, columns.iter(), &options.delimiter))?;
    }
    writer.flush()?;
    Ok(())
}

/// Append `records` to an existing table, keeping its header
///
/// The header of `path` defines the allowed columns. Every row is checked
/// before anything is written, so a row with an unknown column leaves the
/// file untouched.
pub fn append_table(records: &[Row], path: &Path, options: &TableOptions) -> Result<()> {
    options.validate()?;
    let header = read_header(path, &options.delimiter)?
        .ok_or_else(|| TableError::MissingHeader(path.to_path_buf()))?;
    let known = ColumnSet::from_seed(header.iter().cloned());

    for record in records {
        if let Some(key) = record.keys().find(|key| !known.contains(key)) {
            return Err(TableError::InvalidColumn(key.clone()));
        }
    }

    let lines: Vec<String> = records
        .iter()
        .map(|record| format_row(record, header.iter().map(String::as_str), &options.delimiter))
        .collect();
    tracing::debug!(path = %path.display(), rows = lines.len(), "appending to table");

    let mut writer = BufWriter::new(fs::open_append(path)?);
    for line in &lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Columns named by the first line of `path`, `None` for an empty file
fn read_header(path: &Path, delimiter: &str) -> Result<Option<Vec<String>>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(split_fields(fs::strip_line_end(&line), delimiter)))
}
