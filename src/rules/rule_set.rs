//! Ordered rule pipelines
//!
//! Rules are applied one after another. Each rule sees the output of the
//! previous one, so a later rule may match text introduced by an earlier
//! replacement. Rules with longer, more specific patterns must therefore be
//! listed before rules whose pattern is a substring of theirs.

use std::borrow::Cow;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

use super::rule::Rule;

/// An ordered sequence of rules
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates a rule set from already validated rules
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleSet { rules }
    }

    /// Builds a rule set from (pattern, replacement) pairs
    ///
    /// # Errors
    /// Fails on the first pair with an empty pattern, before anything is applied.
    ///
    /// # Examples
    /// ```
    /// use file_rewrite::rules::RuleSet;
    ///
    /// let rule_set = RuleSet::from_pairs([("red", "blue"), ("blue", "green")]).unwrap();
    /// assert_eq!(rule_set.apply("red"), "green");
    /// ```
    pub fn from_pairs<I, P, R>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, R)>,
        P: Into<String>,
        R: Into<String>,
    {
        let rules = pairs
            .into_iter()
            .map(|(pattern, replacement)| Rule::new(pattern, replacement))
            .collect::<Result<Vec<Rule>>>()?;
        Ok(RuleSet { rules })
    }

    /// Appends a rule at the end of the pipeline
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Applies every rule once, in order
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            let replaced = match rule.apply(&current) {
                Cow::Owned(next) => Some(next),
                Cow::Borrowed(_) => None,
            };
            if let Some(next) = replaced {
                current = next;
            }
        }
        current
    }

    /// Total occurrences of all patterns in `text`, counted independently
    ///
    /// Rules are not applied while counting, so the total need not match the
    /// number of substitutions a cascading run would make.
    pub fn count_occurrences(&self, text: &str) -> usize {
        self.rules.iter().map(|rule| rule.count_in(text)).sum()
    }

    /// Whether a second application leaves the output of the first unchanged
    pub fn is_idempotent_on(&self, text: &str) -> bool {
        let once = self.apply(text);
        self.apply(&once) == once
    }

    /// Rules whose own output they would match again on a re-run
    pub fn self_reintroducing_rules(&self) -> Vec<usize> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.reintroduces_pattern())
            .map(|(index, _)| index)
            .collect()
    }

    /// Pairs `(earlier, later)` where the later pattern contains the earlier one
    ///
    /// The earlier rule rewrites the shared text first, so the later, more
    /// specific rule usually never sees its original input.
    pub fn shadowed_rules(&self) -> Vec<(usize, usize)> {
        let mut shadowed = Vec::new();
        for (later, later_rule) in self.rules.iter().enumerate() {
            for (earlier, earlier_rule) in self.rules[..later].iter().enumerate() {
                if later_rule.pattern() != earlier_rule.pattern()
                    && later_rule.pattern().contains(earlier_rule.pattern())
                {
                    shadowed.push((earlier, later));
                }
            }
        }
        shadowed
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        RuleSet {
            rules: iter.into_iter().collect(),
        }
    }
}
