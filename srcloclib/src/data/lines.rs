//! Line counting for a single file.
//!
//! A line is a run of bytes terminated by `\n`, or the non-empty run after the
//! last terminator. This is the count a line-splitting reader yields: blank
//! lines in the middle count, a trailing newline does not add a line, and an
//! empty file has zero lines. Bytes are never decoded, so binary and
//! non-UTF-8 content cannot fail.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::SrclocError;
use crate::Result;

/// Count the lines in the file at `path`.
pub fn count_lines(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SrclocError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    count_lines_in(file).map_err(|source| SrclocError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Count the lines produced by `reader`.
pub fn count_lines_in<R: Read>(reader: R) -> std::io::Result<u64> {
    let mut reader = BufReader::new(reader);
    let mut lines = 0u64;
    let mut pending = false;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        let newlines = buf.iter().filter(|&&b| b == b'\n').count() as u64;
        lines += newlines;
        pending = buf.last() != Some(&b'\n');

        let len = buf.len();
        reader.consume(len);
    }

    if pending {
        lines += 1;
    }

    Ok(lines)
}

/// Count the lines in an in-memory string.
pub fn count_lines_str(source: &str) -> u64 {
    // Reading from a byte slice cannot fail
    count_lines_in(source.as_bytes()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_trailing_newline_does_not_add_line() {
        assert_eq!(count_lines_str("a\nb\nc\n"), 3);
    }

    #[test]
    fn test_last_line_without_newline() {
        assert_eq!(count_lines_str("a\nb\nc"), 3);
    }

    #[test]
    fn test_blank_lines_count() {
        assert_eq!(count_lines_str("a\n\n\nb\n"), 4);
        assert_eq!(count_lines_str("\n"), 1);
    }

    #[test]
    fn test_empty() {
        assert_eq!(count_lines_str(""), 0);
    }

    #[test]
    fn test_crlf() {
        assert_eq!(count_lines_str("a\r\nb\r\n"), 2);
    }

    #[test]
    fn test_binary_content() {
        let bytes: &[u8] = &[0xff, 0xfe, b'\n', 0x00, 0x80, b'\n', 0xc3];
        assert_eq!(count_lines_in(bytes).unwrap(), 3);
    }

    #[test]
    fn test_content_larger_than_buffer() {
        let source = "line\n".repeat(10_000);
        assert_eq!(count_lines_str(&source), 10_000);

        let unterminated = format!("{}tail", "x".repeat(20_000));
        assert_eq!(count_lines_str(&unterminated), 1);
    }

    #[test]
    fn test_count_lines_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.cs");
        fs::write(&path, "class A\n{\n}\n").unwrap();

        assert_eq!(count_lines(&path).unwrap(), 3);
    }

    #[test]
    fn test_count_lines_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.cs");

        match count_lines(&path) {
            Err(SrclocError::FileRead { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected FileRead error, got {:?}", other),
        }
    }
}
