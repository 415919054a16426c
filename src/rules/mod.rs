//! The Dart to C++ filter engine.
//!
//! This module handles:
//! - The built-in rule catalog, in application order
//! - Global regex substitutions
//! - Ordered pipelines of named rules

pub mod catalog;
pub mod pipeline;
pub mod rewriter;

pub use catalog::{BUILTIN_RULES, RuleCategory, RuleDef, find_builtin};
pub use pipeline::{CompiledRule, Pipeline, RuleHits};
pub use rewriter::Substitution;
