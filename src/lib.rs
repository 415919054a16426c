//! dart-filter - a Doxygen input filter that rewrites Dart into C++-like syntax.
//!
//! This library provides:
//! - An ordered catalog of regex rewrite rules (classes, methods, variables,
//!   constructors, accessors, enums, typedefs)
//! - A pipeline that applies those rules in sequence to a whole file
//! - Source reading with strict UTF-8 decoding
//!
//! # Example
//!
//! ```
//! use dart_filter::rules::Pipeline;
//!
//! let pipeline = Pipeline::builtin().unwrap();
//! let cpp = pipeline.apply("class Circle extends Shape {");
//! assert_eq!(cpp, "class Circle : public Shape {");
//! ```

pub mod error;
pub mod rules;
pub mod source;

pub use error::{FilterError, Result};

/// Run the built-in pipeline over a whole document.
pub fn filter_source(content: &str) -> Result<String> {
	Ok(rules::Pipeline::builtin()?.apply(content))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_filter_source() {
		assert_eq!(
			filter_source("enum Color {\n  red,\n}\n").unwrap(),
			"enum class Color {\n  red,\n}\n"
		);
	}
}
