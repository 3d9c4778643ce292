//! JSON files

use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::Result;
use crate::fs::create_file;

/// Deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = BufReader::new(std::fs::File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Pretty-print `value` to `path` with `indent` spaces per level
///
/// Non-ASCII text is written as-is. Parent directories are created.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path, indent: usize) -> Result<()> {
    let indent = " ".repeat(indent);
    let mut writer = BufWriter::new(create_file(path)?);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut serializer)?;
    writer.flush()?;
    Ok(())
}
