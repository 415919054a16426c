use std::path::PathBuf;

/// Library-level structured errors for dart-filter.
///
/// The CLI binary wraps these with `anyhow` for context chains.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
	#[error("Failed to read source file: {path}")]
	SourceRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Source file is not valid UTF-8: {path}")]
	SourceDecode {
		path: PathBuf,
		#[source]
		source: std::string::FromUtf8Error,
	},

	#[error("Failed to write filtered output")]
	OutputWrite {
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},
}

/// Result type alias using FilterError.
pub type Result<T> = std::result::Result<T, FilterError>;
