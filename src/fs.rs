//! Whole-file and line-oriented file access
//!
//! Thin helpers over `std::fs`. Every write that replaces a file creates its
//! missing parent directories first. Handles are scoped to each call.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Create the parent directory of `path` if it does not exist yet
pub fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

/// Create (or truncate) `path`, creating parent directories as needed
pub fn create_file(path: &Path) -> io::Result<File> {
    ensure_parent(path)?;
    File::create(path)
}

/// Open `path` for appending, creating it if missing
pub fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().append(true).create(true).open(path)
}

/// Read a whole file as UTF-8 text
pub fn read_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Replace the file's content with `content`, returning the bytes written
pub fn write_file(content: &str, path: &Path) -> io::Result<usize> {
    let mut file = create_file(path)?;
    file.write_all(content.as_bytes())?;
    Ok(content.len())
}

pub fn read_bytes(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}

pub fn write_bytes(bytes: &[u8], path: &Path) -> io::Result<()> {
    let mut file = create_file(path)?;
    file.write_all(bytes)
}

/// Strip trailing line terminators from one raw line
pub(crate) fn strip_line_end(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Read every line of a file, dropping those that start with `comment_prefix`
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn read_lines(path: &Path, comment_prefix: Option<&str>) -> io::Result<Vec<String>> {
    let content = read_file(path)?;
    let prefix = comment_prefix.filter(|p| !p.is_empty());
    Ok(split_lines(&content)
        .into_iter()
        .filter(|line| prefix.map_or(true, |p| !line.starts_with(p)))
        .map(str::to_string)
        .collect())
}

/// Split text on any line ending; a trailing terminator adds no empty line
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Write lines joined by `\n`, without a trailing newline
pub fn write_lines<S: AsRef<str>>(lines: &[S], path: &Path) -> io::Result<()> {
    let content = join_lines(lines);
    write_file(&content, path).map(|_| ())
}

/// Append lines to a file, each terminated by `\n`
pub fn append_lines<S: AsRef<str>>(lines: &[S], path: &Path) -> io::Result<()> {
    let mut content = join_lines(lines);
    content.push('\n');
    let mut file = open_append(path)?;
    file.write_all(content.as_bytes())
}

fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("\n")
}

/// List the files of `dir`, sorted
///
/// Subdirectories are only descended into when `recursive` is set. With an
/// `extension`, only file names ending in `.{extension}` are kept.
pub fn list_files(
    dir: &Path,
    extension: Option<&str>,
    recursive: bool,
) -> io::Result<Vec<PathBuf>> {
    let suffix = extension.map(|ext| format!(".{}", ext));
    let mut files = Vec::new();
    collect_files(dir, suffix.as_deref(), recursive, &mut files)?;
    files.sort();
    tracing::debug!(dir = %dir.display(), count = files.len(), "listed files");
    Ok(files)
}

fn collect_files(
    dir: &Path,
    suffix: Option<&str>,
    recursive: bool,
    out: &mut Vec<PathBuf>,
) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if recursive {
                collect_files(&path, suffix, recursive, out)?;
            }
            continue;
        }
        let matches = match suffix {
            Some(suffix) => path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| name.ends_with(suffix)),
            None => true,
        };
        if matches {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const LINES: [&str; 3] = ["foo", "foo\tbar", "foo\tbar  foo bar"];

    #[test]
    fn test_write_and_read_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.txt");
        write_lines(&LINES, &path).unwrap();
        assert_eq!(read_file(&path).unwrap(), "foo\nfoo\tbar\nfoo\tbar  foo bar");
        assert_eq!(read_lines(&path, None).unwrap(), LINES);
    }

    #[test]
    fn test_read_lines_with_comment() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test_comment.txt");
        write_lines(&["foo", "foo\tbar", "##commented out", "foo\tbar  foo bar"], &path).unwrap();
        assert_eq!(read_lines(&path, Some("##")).unwrap(), LINES);
    }

    #[test]
    fn test_read_lines_strips_crlf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crlf.txt");
        write_file("a\r\nb\r\n", &path).unwrap();
        assert_eq!(read_lines(&path, None).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_read_lines_splits_lone_cr() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("old_mac.txt");
        write_file("a\rb\r\nc\n\nd", &path).unwrap();
        assert_eq!(read_lines(&path, None).unwrap(), vec!["a", "b", "c", "", "d"]);
    }

    #[test]
    fn test_split_lines_trailing_terminator() {
        assert_eq!(split_lines("x\n"), vec!["x"]);
        assert_eq!(split_lines("x\r"), vec!["x"]);
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_append_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("append.txt");
        append_lines(&["a"], &path).unwrap();
        append_lines(&["b", "c"], &path).unwrap();
        assert_eq!(read_file(&path).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.txt");
        assert_eq!(write_file("hello", &path).unwrap(), 5);
        assert_eq!(read_file(&path).unwrap(), "hello");

        let bin = dir.path().join("bin/data.bin");
        write_bytes(&[0, 1, 2, 255], &bin).unwrap();
        assert_eq!(read_bytes(&bin).unwrap(), vec![0, 1, 2, 255]);
    }

    #[test]
    fn test_create_file_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.txt");
        write_file("content", &path).unwrap();
        drop(create_file(&path).unwrap());
        assert_eq!(read_file(&path).unwrap(), "");
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = read_file(&dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_list_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        for name in ["a.json", "b.json", "c.json", "notes.txt", "sub/d.json"] {
            write_file("{}", &root.join(name)).unwrap();
        }

        assert_eq!(list_files(root, None, false).unwrap().len(), 4);
        assert_eq!(list_files(root, Some("txt"), false).unwrap().len(), 1);
        assert_eq!(list_files(root, Some("piyo"), false).unwrap().len(), 0);
        assert_eq!(list_files(root, Some("a"), false).unwrap().len(), 0);

        let json = list_files(root, Some("json"), false).unwrap();
        assert_eq!(json, vec![root.join("a.json"), root.join("b.json"), root.join("c.json")]);

        assert_eq!(list_files(root, Some("json"), true).unwrap().len(), 4);
    }
}
