//! Rewrite rules
//!
//! This module contains the literal substitution rules and the ordered rule
//! sets that apply them to text.

mod rule;
mod rule_set;

pub use rule::{Rule, RuleDefinition};
pub use rule_set::RuleSet;
