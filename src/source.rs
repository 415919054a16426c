//! Reading Dart source files and emitting filtered text.

use crate::error::{FilterError, Result};
use std::io::Write;
use std::path::Path;

/// Read a whole file as strict UTF-8, with line endings normalized to `\n`.
///
/// The file handle is closed before this returns.
pub fn read_source(path: &Path) -> Result<String> {
	let bytes = std::fs::read(path).map_err(|source| FilterError::SourceRead {
		path: path.to_path_buf(),
		source,
	})?;

	let text = String::from_utf8(bytes).map_err(|source| FilterError::SourceDecode {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(normalize_newlines(&text))
}

/// Translate `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> String {
	if !text.contains('\r') {
		return text.to_string();
	}
	text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Write the filtered text followed by a newline, then flush.
pub fn write_output<W: Write>(out: &mut W, text: &str) -> Result<()> {
	writeln!(out, "{text}")
		.and_then(|()| out.flush())
		.map_err(|source| FilterError::OutputWrite { source })
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn test_read_source() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("shape.dart");
		fs::write(&path, "enum Color {\n}\n").unwrap();

		assert_eq!(read_source(&path).unwrap(), "enum Color {\n}\n");
	}

	#[test]
	fn test_read_source_normalizes_crlf() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("crlf.dart");
		fs::write(&path, "a\r\nb\rc\n").unwrap();

		assert_eq!(read_source(&path).unwrap(), "a\nb\nc\n");
	}

	#[test]
	fn test_read_source_missing_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("missing.dart");

		match read_source(&path).unwrap_err() {
			FilterError::SourceRead { path: reported, .. } => assert_eq!(reported, path),
			other => panic!("Expected SourceRead error, got {other:?}"),
		}
	}

	#[test]
	fn test_read_source_invalid_utf8() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("binary.dart");
		fs::write(&path, [0x63, 0x6c, 0xff, 0xfe]).unwrap();

		assert!(matches!(
			read_source(&path),
			Err(FilterError::SourceDecode { .. })
		));
	}

	struct BrokenPipe;

	impl Write for BrokenPipe {
		fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
			Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
		}

		fn flush(&mut self) -> std::io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn test_write_output_reports_write_failure() {
		match write_output(&mut BrokenPipe, "class A {").unwrap_err() {
			FilterError::OutputWrite { source } => {
				assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe)
			}
			other => panic!("Expected OutputWrite error, got {other:?}"),
		}
	}

	#[test]
	fn test_write_output_appends_newline() {
		let mut buf = Vec::new();
		write_output(&mut buf, "class A {").unwrap();
		assert_eq!(buf, b"class A {\n");
	}
}
