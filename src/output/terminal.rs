//! Box-drawn terminal table output

use std::io::Write;

use anyhow::Result;

use crate::model::{ColumnSet, Record};

use super::OutputFormatter;

/// Renders records as an aligned table
///
/// A column missing from a named record is shown as an empty cell.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    /// Header row followed by one row per record
    fn table_data(&self, records: &[Record]) -> Vec<Vec<String>> {
        let mut columns = ColumnSet::new();
        let mut positional = 0;
        for record in records {
            match record {
                Record::Named(map) => {
                    for key in map.keys() {
                        columns.insert(key.as_str());
                    }
                }
                Record::Fields(fields) => positional = positional.max(fields.len()),
            }
        }

        let mut headers: Vec<String> = columns.iter().map(str::to_string).collect();
        if headers.is_empty() {
            headers = (1..=positional).map(|i| i.to_string()).collect();
        }

        let mut data = Vec::with_capacity(records.len() + 1);
        data.push(headers);
        for record in records {
            let row: Vec<String> = match record {
                Record::Named(map) => columns
                    .iter()
                    .map(|c| map.get(c).cloned().unwrap_or_default())
                    .collect(),
                Record::Fields(fields) => fields.clone(),
            };
            data.push(row);
        }
        data
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, records: &[Record], writer: &mut dyn Write) -> Result<()> {
        if records.is_empty() {
            writeln!(writer, "No rows.")?;
            return Ok(());
        }

        let display = build_table(&self.table_data(records));
        write!(writer, "{}", display)?;
        writeln!(writer, "{} row(s)", records.len())?;
        Ok(())
    }
}

/// Build a formatted table from data; the first row is the header
fn build_table(data: &[Vec<String>]) -> String {
    let col_count = data.iter().map(Vec::len).max().unwrap_or(0);
    if col_count == 0 {
        return String::new();
    }

    let mut col_widths: Vec<usize> = vec![0; col_count];
    for row in data {
        for (i, cell) in row.iter().enumerate() {
            col_widths[i] = col_widths[i].max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_border(&mut output, &col_widths, ('┌', '┬', '┐'));

    if let Some(header) = data.first() {
        push_row(&mut output, header, &col_widths);
    }

    push_border(&mut output, &col_widths, ('├', '┼', '┤'));

    for row in data.iter().skip(1) {
        push_row(&mut output, row, &col_widths);
    }

    push_border(&mut output, &col_widths, ('└', '┴', '┘'));
    output
}

fn push_border(output: &mut String, col_widths: &[usize], (left, mid, right): (char, char, char)) {
    output.push(left);
    for (i, width) in col_widths.iter().enumerate() {
        output.push_str(&"─".repeat(*width + 2));
        if i < col_widths.len() - 1 {
            output.push(mid);
        }
    }
    output.push(right);
    output.push('\n');
}

fn push_row(output: &mut String, row: &[String], col_widths: &[usize]) {
    output.push('│');
    for (i, width) in col_widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        output.push_str(&format!(" {:width$} │", cell, width = width));
    }
    output.push('\n');
}
