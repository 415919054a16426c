//! The built-in Dart to C++ rewrite rules, in application order.

use std::fmt;

/// Which kind of Dart construct a built-in rule targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
	DocComment,
	Class,
	Method,
	Variable,
	Constructor,
	Factory,
	StaticMethod,
	Override,
	Accessor,
	Enum,
	Typedef,
}

impl fmt::Display for RuleCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			RuleCategory::DocComment => "doc-comment",
			RuleCategory::Class => "class",
			RuleCategory::Method => "method",
			RuleCategory::Variable => "variable",
			RuleCategory::Constructor => "constructor",
			RuleCategory::Factory => "factory",
			RuleCategory::StaticMethod => "static-method",
			RuleCategory::Override => "override",
			RuleCategory::Accessor => "accessor",
			RuleCategory::Enum => "enum",
			RuleCategory::Typedef => "typedef",
		};
		f.write_str(label)
	}
}

/// Uncompiled definition of a built-in rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
	/// Stable name, shown by `--list-rules` and `--verbose`.
	pub name: &'static str,

	pub category: RuleCategory,

	pub pattern: &'static str,

	/// Replacement template (`${n}` references capture group n).
	pub replacement: &'static str,
}

/// `\w` in a rule pattern: letters, numbers and underscore. Unlike the regex
/// crate's own `\w`, combining marks and other connector punctuation are not
/// word characters.
const WORD_CLASS: &str = r"[\p{L}\p{N}_]";

/// `\s` in a rule pattern: Unicode white space plus the ASCII information
/// separators `\x1c`..`\x1f`.
const SPACE_CLASS: &str = r"[\s\x1c-\x1f]";

impl RuleDef {
	/// The pattern with its `\w` and `\s` shorthands expanded to the
	/// character classes the filter matches with.
	pub fn compiled_pattern(&self) -> String {
		self.pattern
			.replace(r"\w", WORD_CLASS)
			.replace(r"\s", SPACE_CLASS)
	}
}

const fn rule(
	name: &'static str,
	category: RuleCategory,
	pattern: &'static str,
	replacement: &'static str,
) -> RuleDef {
	RuleDef {
		name,
		category,
		pattern,
		replacement,
	}
}

/// Every built-in rule. Order is significant: each rule sees the output of
/// the one before it.
pub const BUILTIN_RULES: &[RuleDef] = &[
	// Doxygen already understands `///`; kept as its own step so the marker
	// can change independently.
	rule("doc-comment", RuleCategory::DocComment, r"///", "///"),
	rule(
		"class-extends",
		RuleCategory::Class,
		r"class\s+(\w+)\s+extends\s+(\w+)",
		"class ${1} : public ${2}",
	),
	rule(
		"class-implements",
		RuleCategory::Class,
		r"class\s+(\w+)\s+implements\s+(\w+)",
		"class ${1} : public ${2}",
	),
	rule(
		"class-with",
		RuleCategory::Class,
		r"class\s+(\w+)\s+with\s+(\w+)",
		"class ${1} : public ${2}",
	),
	rule(
		"abstract-class",
		RuleCategory::Class,
		r"abstract class\s+(\w+)",
		"class ${1}",
	),
	rule(
		"method-signature",
		RuleCategory::Method,
		r"(\w+)\s*\(([^)]*)\)\s*\{",
		"${1}(${2}) {",
	),
	rule(
		"async-method",
		RuleCategory::Method,
		r"(\w+)\s*\(([^)]*)\)\s*async\s*\{",
		"Future<void> ${1}(${2}) {",
	),
	rule(
		"future-method",
		RuleCategory::Method,
		r"Future<(\w+)>\s+(\w+)\s*\(([^)]*)\)",
		"Future<${1}> ${2}(${3})",
	),
	rule(
		"final-variable",
		RuleCategory::Variable,
		r"final\s+(\w+)\s+(\w+)",
		"${1} ${2}",
	),
	rule(
		"var-variable",
		RuleCategory::Variable,
		r"var\s+(\w+)",
		"auto ${1}",
	),
	rule(
		"const-variable",
		RuleCategory::Variable,
		r"const\s+(\w+)\s+(\w+)",
		"const ${1} ${2}",
	),
	// Lossy: the named parameter block is dropped, not translated.
	rule(
		"named-constructor",
		RuleCategory::Constructor,
		r"(\w+)\(\{[^}]*\}\)",
		"${1}()",
	),
	rule(
		"factory-constructor",
		RuleCategory::Factory,
		r"factory\s+(\w+)",
		"static ${1}",
	),
	rule(
		"static-method",
		RuleCategory::StaticMethod,
		r"static\s+(\w+)\s+(\w+)\s*\(([^)]*)\)",
		"static ${1} ${2}(${3})",
	),
	rule(
		"override-annotation",
		RuleCategory::Override,
		r"@override",
		"virtual",
	),
	// The accessor rules open a brace they never close.
	rule(
		"getter",
		RuleCategory::Accessor,
		r"(\w+)\s+get\s+(\w+)\s*=>",
		"${1} get${2}() { return",
	),
	rule(
		"setter",
		RuleCategory::Accessor,
		r"set\s+(\w+)\s*\(([^)]*)\)\s*=>",
		"void set${1}(${2}) {",
	),
	rule(
		"enum",
		RuleCategory::Enum,
		r"enum\s+(\w+)\s*\{",
		"enum class ${1} {",
	),
	rule(
		"typedef",
		RuleCategory::Typedef,
		r"typedef\s+(\w+)\s*=\s*([^;]+);",
		"typedef ${2} ${1};",
	),
];

/// Look up a built-in rule by name.
pub fn find_builtin(name: &str) -> Option<&'static RuleDef> {
	BUILTIN_RULES.iter().find(|def| def.name == name)
}
