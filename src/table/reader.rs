//! Buffered table reads

use std::path::Path;

use crate::config::TableOptions;
use crate::error::Result;
use crate::fs;
use crate::model::Record;

use super::parse::{named_record, split_fields, EmptyFields};

/// Read a whole table file into memory
///
/// Comment lines are removed before the header is looked for. In header mode
/// every row must have exactly one field per column, and empty fields are
/// left out of the returned [`Record::Named`]. Without a header each line
/// becomes a [`Record::Fields`].
pub fn read_table(path: &Path, options: &TableOptions) -> Result<Vec<Record>> {
    options.validate()?;
    let delimiter = options.delimiter.as_str();
    let mut lines = fs::read_lines(path, options.comment_prefix())?.into_iter();

    let columns = if options.has_header {
        match lines.next() {
            Some(header) => Some(split_fields(&header, delimiter)),
            None => return Ok(Vec::new()),
        }
    } else {
        None
    };

    let mut records = Vec::new();
    for line in lines {
        let fields = split_fields(&line, delimiter);
        let record = match &columns {
            Some(columns) => named_record(columns, fields, &line, EmptyFields::Drop)?,
            None => Record::Fields(fields),
        };
        records.push(record);
    }

    tracing::debug!(path = %path.display(), rows = records.len(), "read table");
    Ok(records)
}
