//! JSON output formats

use std::io::Write;

use anyhow::Result;

use crate::model::Record;

use super::OutputFormatter;

/// Pretty-printed JSON array output
pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn render(&self, records: &[Record], writer: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, records)?;
        writeln!(writer)?;
        Ok(())
    }
}

/// One JSON document per record
pub struct JsonLinesOutput;

impl JsonLinesOutput {
    /// Write a single record as one line
    pub fn write_record(&self, record: &Record, writer: &mut dyn Write) -> Result<()> {
        serde_json::to_writer(&mut *writer, record)?;
        writeln!(writer)?;
        Ok(())
    }
}

impl OutputFormatter for JsonLinesOutput {
    fn render(&self, records: &[Record], writer: &mut dyn Write) -> Result<()> {
        for record in records {
            self.write_record(record, writer)?;
        }
        Ok(())
    }
}
