//! A single literal rewrite rule
//!
//! A rule pairs a literal pattern with a literal replacement. Neither side is
//! interpreted; matching is plain substring search.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::errors::{invalid_rule_error, Error, Result};

/// Raw rule as it appears in a configuration file
///
/// This is the unchecked form; it becomes a [`Rule`] only through
/// `TryFrom`, which rejects empty patterns. A deleting rule must spell out
/// `replacement: ''`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    /// Optional human-readable label used in log messages
    #[serde(default)]
    pub title: Option<String>,
    /// Literal text to search for
    pub pattern: String,
    /// Literal text that replaces every occurrence of the pattern
    pub replacement: String,
}

/// An immutable (pattern, replacement) pair
///
/// The pattern is guaranteed to be non-empty.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "RuleDefinition", into = "RuleDefinition")]
pub struct Rule {
    title: Option<String>,
    pattern: String,
    replacement: String,
}

impl Rule {
    /// Creates a new rule
    ///
    /// # Errors
    /// Returns [`Error::InvalidRule`] if `pattern` is empty.
    ///
    /// # Examples
    /// ```
    /// use file_rewrite::rules::Rule;
    ///
    /// let rule = Rule::new("A", "B").unwrap();
    /// assert_eq!(rule.apply("A A A"), "B B B");
    /// assert!(Rule::new("", "B").is_err());
    /// ```
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(invalid_rule_error("pattern must not be empty"));
        }

        Ok(Rule {
            title: None,
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Attaches a title to the rule
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Label used when the rule is mentioned in log messages
    pub fn label(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("'{}'", self.pattern),
        }
    }

    /// Replaces every non-overlapping occurrence of the pattern, left to right
    ///
    /// Borrows the input unchanged when the pattern does not occur.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.contains(&self.pattern) {
            Cow::Owned(text.replace(&self.pattern, &self.replacement))
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Number of non-overlapping occurrences of the pattern in `text`
    pub fn count_in(&self, text: &str) -> usize {
        text.matches(&self.pattern).count()
    }

    /// Whether the replacement contains the pattern while differing from it
    ///
    /// Such a rule matches its own output, so every re-run grows the text.
    pub fn reintroduces_pattern(&self) -> bool {
        self.replacement != self.pattern && self.replacement.contains(&self.pattern)
    }
}

impl TryFrom<RuleDefinition> for Rule {
    type Error = Error;

    fn try_from(definition: RuleDefinition) -> Result<Self> {
        if definition.pattern.is_empty() {
            let detail = match &definition.title {
                Some(title) => format!("rule '{title}' has an empty pattern"),
                None => "pattern must not be empty".to_string(),
            };
            return Err(invalid_rule_error(&detail));
        }

        Ok(Rule {
            title: definition.title,
            pattern: definition.pattern,
            replacement: definition.replacement,
        })
    }
}

impl From<Rule> for RuleDefinition {
    fn from(rule: Rule) -> Self {
        RuleDefinition {
            title: rule.title,
            pattern: rule.pattern,
            replacement: rule.replacement,
        }
    }
}
