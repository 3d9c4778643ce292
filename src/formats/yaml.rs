//! YAML files

use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::Result;
use crate::fs::create_file;

pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = BufReader::new(std::fs::File::open(path)?);
    Ok(serde_yaml::from_reader(reader)?)
}

/// Serialize `value` as YAML, creating parent directories
///
/// The indent width is fixed at two spaces; `serde_yaml` does not expose it.
pub fn write_yaml<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(create_file(path)?);
    serde_yaml::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Settings {
        name: String,
        tags: Vec<String>,
    }

    #[test]
    fn test_write_then_read_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("conf/settings.yaml");
        let settings = Settings {
            name: "fsutils".to_string(),
            tags: vec!["io".to_string(), "tsv".to_string()],
        };
        write_yaml(&settings, &path).unwrap();
        let loaded: Settings = read_yaml(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_nested_maps_indent_two_spaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested.yaml");
        let value = indexmap::IndexMap::from([("outer", indexmap::IndexMap::from([("inner", 1)]))]);
        write_yaml(&value, &path).unwrap();
        assert_eq!(crate::fs::read_file(&path).unwrap(), "outer:\n  inner: 1\n");
    }

    #[test]
    fn test_read_missing_yaml() {
        let dir = tempdir().unwrap();
        let err = read_yaml::<Settings>(&dir.path().join("none.yaml")).unwrap_err();
        assert!(matches!(err, crate::error::FormatError::Io(_)));
    }
}
