//! Output formatting for records read by the CLI

mod json;
mod terminal;

use std::io::Write;

use anyhow::Result;

use crate::config::OutputFormat;
use crate::model::Record;

pub use json::{JsonLinesOutput, JsonOutput};
pub use terminal::TerminalOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render records to a writer
    fn render(&self, records: &[Record], writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Table => Box::new(TerminalOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
            OutputFormat::JsonLines => Box::new(JsonLinesOutput),
        }
    }
}

/// Render records to stdout
pub fn render_to_stdout(records: &[Record], format: OutputFormat) -> Result<()> {
    let formatter = OutputFactory::create(format);
    let mut stdout = std::io::stdout().lock();
    formatter.render(records, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
