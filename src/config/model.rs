//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use log::warn;
use serde::Deserialize;

use crate::discovery::{ExclusionPolicy, ScanOptions};
use crate::errors;
use crate::rules::{Rule, RuleSet};

use super::deserializer::deserialize_path;

/// Configuration for a rewrite run
///
/// Contains the directory to rewrite, the candidate filters and the ordered
/// rules to apply.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory whose files are rewritten
    #[serde(default, deserialize_with = "deserialize_path")]
    pub root: PathBuf,
    /// File extensions to process; empty processes every file
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Whether to descend into subdirectories
    #[serde(default = "default_recursive")]
    pub recursive: bool,
    /// Whether hidden files and directories are candidates
    #[serde(default)]
    pub include_hidden: bool,
    /// Substring markers; a path containing any of them is skipped
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Glob patterns; a path matching any of them is skipped
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    /// Report changes without writing them
    #[serde(default)]
    pub dry_run: bool,
    /// Process files concurrently
    #[serde(default)]
    pub parallel: bool,
    /// Warn about files a second run would change again
    #[serde(default)]
    pub verify_idempotence: bool,
    /// Rules applied to every file, in order
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// Path to parent configuration file for inheritance
    #[serde(default)]
    pub parent: Option<String>,
}

impl Config {
    /// Validates the configuration
    ///
    /// This method checks that:
    /// - a root directory is set, and exists when `check_paths` is true
    /// - at least one rule is present
    ///
    /// Extensions are normalised by removing a leading dot. Rule ordering
    /// problems are logged as warnings without failing validation.
    ///
    /// # Arguments
    /// * `check_paths` - Whether to check that the root exists and is a directory
    ///
    /// # Errors
    /// Returns an error with a detailed message if validation fails
    pub fn validate(&mut self, check_paths: bool) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(anyhow!(
                "No root directory specified in configuration. A root directory is required."
            ));
        }

        if check_paths {
            if !self.root.exists() {
                return Err(anyhow!(
                    "Root directory does not exist: {}\n{}",
                    self.root.display(),
                    "Please check the path and ensure it exists."
                ));
            }

            if !self.root.is_dir() {
                return Err(anyhow!(
                    "Root path is not a directory: {}\n{}",
                    self.root.display(),
                    "Please specify a valid directory path."
                ));
            }
        }

        if self.rules.is_empty() {
            return Err(anyhow!(
                "No rules specified in configuration. At least one rule is required."
            ));
        }

        for extension in &mut self.extensions {
            if let Some(stripped) = extension.strip_prefix('.') {
                *extension = stripped.to_string();
            }
        }
        self.extensions.retain(|extension| !extension.is_empty());

        self.warn_about_rule_order();

        Ok(())
    }

    /// The configured rules as an ordered rule set
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::new(self.rules.clone())
    }

    /// The exclusion policy built from markers and globs
    ///
    /// # Errors
    /// Returns an error if any exclusion glob is invalid
    pub fn exclusion_policy(&self) -> errors::Result<ExclusionPolicy> {
        ExclusionPolicy::new(self.exclude.iter().cloned(), self.exclude_globs.iter())
    }

    /// The candidate filters for the directory scan
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            extensions: self.extensions.clone(),
            recursive: self.recursive,
            include_hidden: self.include_hidden,
        }
    }

    fn warn_about_rule_order(&self) {
        let rule_set = self.rule_set();

        for index in rule_set.self_reintroducing_rules() {
            warn!(
                "Rule #{} {} contains its own pattern in the replacement; re-running it will apply it again",
                index + 1,
                self.rules[index].label()
            );
        }

        for (earlier, later) in rule_set.shadowed_rules() {
            warn!(
                "Rule #{} {} contains the pattern of earlier rule #{} {}; list the longer pattern first",
                later + 1,
                self.rules[later].label(),
                earlier + 1,
                self.rules[earlier].label()
            );
        }
    }
}

/// Default value for recursive scanning
fn default_recursive() -> bool {
    true
}
