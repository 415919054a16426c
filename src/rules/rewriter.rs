use crate::error::{FilterError, Result};
use regex::Regex;

/// A compiled text substitution applied to every non-overlapping match.
///
/// Replacement templates use the `regex` crate syntax, so captures are
/// referenced as `${1}`, `${2}`, ... and a literal dollar sign is `$$`.
#[derive(Debug, Clone)]
pub struct Substitution {
	/// The pattern to match.
	pub pattern: Regex,

	/// The replacement template.
	pub replacement: String,
}

impl Substitution {
	/// Compile a substitution from a pattern string and replacement template.
	pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
		let pattern = Regex::new(pattern).map_err(|source| FilterError::InvalidRegex {
			pattern: pattern.to_string(),
			source,
		})?;

		Ok(Substitution {
			pattern,
			replacement: replacement.to_string(),
		})
	}

	/// Apply this substitution to a string.
	pub fn apply(&self, input: &str) -> String {
		self.pattern
			.replace_all(input, self.replacement.as_str())
			.into_owned()
	}

	/// Number of replacements `apply` would perform on `input`.
	pub fn count_matches(&self, input: &str) -> usize {
		self.pattern.find_iter(input).count()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_apply_replaces_every_match() {
		let sub = Substitution::new("var", "auto").unwrap();
		assert_eq!(sub.apply("var var var"), "auto auto auto");
	}

	#[test]
	fn test_apply_with_capture_groups() {
		let sub = Substitution::new(r"(\w+)\?", "${1}*").unwrap();
		assert_eq!(sub.apply("String? name; int? age;"), "String* name; int* age;");
	}

	#[test]
	fn test_braced_group_followed_by_word_chars() {
		let sub = Substitution::new(r"get\s+(\w+)", "get${1}()").unwrap();
		assert_eq!(sub.apply("get area"), "getarea()");
	}

	#[test]
	fn test_count_matches() {
		let sub = Substitution::new("x", "y").unwrap();
		assert_eq!(sub.count_matches("x x x"), 3);
		assert_eq!(sub.count_matches("none"), 0);
	}

	#[test]
	fn test_no_match_returns_input() {
		let sub = Substitution::new("@override", "virtual").unwrap();
		assert_eq!(sub.apply("int x;"), "int x;");
	}

	#[test]
	fn test_invalid_regex_reports_pattern() {
		match Substitution::new("[invalid", "").unwrap_err() {
			FilterError::InvalidRegex { pattern, .. } => assert_eq!(pattern, "[invalid"),
			other => panic!("Expected InvalidRegex error, got {other:?}"),
		}
	}
}
