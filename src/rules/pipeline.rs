use crate::error::Result;
use crate::rules::catalog::{BUILTIN_RULES, RuleCategory, RuleDef};
use crate::rules::rewriter::Substitution;

/// A named rule ready to be applied.
#[derive(Debug, Clone)]
pub struct CompiledRule {
	pub name: String,

	pub category: RuleCategory,

	pub substitution: Substitution,
}

impl CompiledRule {
	/// Compile a built-in rule.
	pub fn from_def(def: &RuleDef) -> Result<Self> {
		Ok(CompiledRule {
			name: def.name.to_string(),
			category: def.category,
			substitution: Substitution::new(&def.compiled_pattern(), def.replacement)?,
		})
	}

	/// Rewrite `input` with this rule alone.
	pub fn apply(&self, input: &str) -> String {
		self.substitution.apply(input)
	}
}

/// How many replacements one rule performed during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHits {
	pub name: String,
	pub replacements: usize,
}

/// An ordered list of rules; the output of each is the input of the next.
#[derive(Debug, Clone)]
pub struct Pipeline {
	rules: Vec<CompiledRule>,
}

impl Pipeline {
	/// Build a pipeline from already-compiled rules, kept in the given order.
	pub fn new(rules: Vec<CompiledRule>) -> Self {
		Pipeline { rules }
	}

	/// The built-in Dart to C++ pipeline.
	pub fn builtin() -> Result<Self> {
		let rules = BUILTIN_RULES
			.iter()
			.map(CompiledRule::from_def)
			.collect::<Result<Vec<_>>>()?;
		Ok(Pipeline::new(rules))
	}

	pub fn rules(&self) -> &[CompiledRule] {
		&self.rules
	}

	/// Find a rule by name.
	pub fn rule(&self, name: &str) -> Option<&CompiledRule> {
		self.rules.iter().find(|rule| rule.name == name)
	}

	/// Run every rule over `input`, in order.
	pub fn apply(&self, input: &str) -> String {
		self.rules
			.iter()
			.fold(input.to_string(), |text, rule| rule.apply(&text))
	}

	/// Like [`Pipeline::apply`], also reporting how often each rule fired.
	pub fn apply_with_report(&self, input: &str) -> (String, Vec<RuleHits>) {
		let mut hits = Vec::with_capacity(self.rules.len());
		let mut text = input.to_string();

		for rule in &self.rules {
			hits.push(RuleHits {
				name: rule.name.clone(),
				replacements: rule.substitution.count_matches(&text),
			});
			text = rule.apply(&text);
		}

		(text, hits)
	}
}
