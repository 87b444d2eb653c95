//! Rewrite engine
//!
//! This module contains the engine that applies a rule set to candidate files
//! and the workflow that drives it from a configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::{load_config, read_or_create};
use crate::discovery::{scan_directory, ExclusionPolicy};
use crate::errors::Error;
use crate::file_ops::{write_contents, FileTarget};
use crate::rules::RuleSet;

use super::report::{ChangeReport, FailureKind, FileFailure, FileOutcome, FileStatus};

/// Applies a rule set to files and reports what changed
///
/// Each file is an independent unit of work: a failure is recorded in the
/// report and the run continues with the next candidate.
#[derive(Debug, Clone)]
pub struct RewriteEngine {
    rule_set: RuleSet,
    exclusions: ExclusionPolicy,
    dry_run: bool,
    parallel: bool,
    verify_idempotence: bool,
}

impl RewriteEngine {
    pub fn new(rule_set: RuleSet, exclusions: ExclusionPolicy) -> Self {
        RewriteEngine {
            rule_set,
            exclusions,
            dry_run: false,
            parallel: false,
            verify_idempotence: false,
        }
    }

    /// Report changes without writing them
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process files concurrently; the report order is unaffected
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Warn about files a second run would change again
    pub fn verify_idempotence(mut self, verify: bool) -> Self {
        self.verify_idempotence = verify;
        self
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Runs the rule set over every candidate
    ///
    /// # Arguments
    /// * `candidates` - Paths to consider, in the order they should be reported
    ///
    /// # Returns
    /// * `ChangeReport` - One entry per candidate
    pub fn run<I, P>(&self, candidates: I) -> ChangeReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let candidates: Vec<PathBuf> = candidates
            .into_iter()
            .map(|path| path.as_ref().to_path_buf())
            .collect();

        debug!(
            "Running {} rules over {} candidates{}",
            self.rule_set.len(),
            candidates.len(),
            if self.parallel { " in parallel" } else { "" }
        );

        let entries: Vec<FileOutcome> = if self.parallel {
            candidates
                .par_iter()
                .map(|path| self.process_candidate(path))
                .collect()
        } else {
            candidates
                .iter()
                .map(|path| self.process_candidate(path))
                .collect()
        };

        let report = ChangeReport::new(entries, self.dry_run);

        info!(
            "Examined {} files: {} modified, {} unchanged, {} skipped, {} errored",
            report.examined(),
            report.modified(),
            report.unchanged(),
            report.skipped(),
            report.errored()
        );

        report
    }

    fn process_candidate(&self, path: &Path) -> FileOutcome {
        if self.exclusions.is_excluded(path) {
            debug!("Skipping excluded file: {}", path.display());
            return FileOutcome::new(path, FileStatus::Skipped, 0);
        }

        let target = match FileTarget::read(path) {
            Ok(target) => target,
            Err(e) => {
                warn!("{e}");
                return FileOutcome::new(path, failure(FailureKind::Unreadable, &e), 0);
            }
        };

        let original = target.original();
        let occurrences = self.rule_set.count_occurrences(original);
        let current = self.rule_set.apply(original);

        if current == original {
            debug!("No changes: {}", path.display());
            return FileOutcome::new(path, FileStatus::Unchanged, occurrences);
        }

        if self.verify_idempotence && self.rule_set.apply(&current) != current {
            warn!(
                "Rules are not idempotent on {}: a second run would change it again",
                path.display()
            );
        }

        if self.dry_run {
            debug!("Would update: {}", path.display());
            return FileOutcome::new(path, FileStatus::Modified, occurrences);
        }

        match write_contents(path, &current) {
            Ok(()) => {
                debug!("Updated: {} ({} occurrences)", path.display(), occurrences);
                FileOutcome::new(path, FileStatus::Modified, occurrences)
            }
            Err(e) => {
                warn!("{e}");
                FileOutcome::new(path, failure(FailureKind::Unwritable, &e), occurrences)
            }
        }
    }
}

fn failure(kind: FailureKind, error: &Error) -> FileStatus {
    FileStatus::Failed(FileFailure {
        kind,
        message: error.to_string(),
    })
}

/// Options for processing files
#[derive(Debug, Clone, Default)]
pub struct ProcessingOptions {
    /// Path to the configuration file
    pub config_path: PathBuf,
    /// Report changes without writing them, overriding the configuration
    pub dry_run: bool,
    /// Process files concurrently, overriding the configuration
    pub parallel: bool,
    /// Where to write the YAML report, if anywhere
    pub report_path: Option<PathBuf>,
}

/// Processes files based on the configuration
///
/// This function orchestrates the workflow steps:
/// 1. Read and validate the configuration
/// 2. Build the rule set and the exclusion policy
/// 3. Scan the root directory for candidates
/// 4. Run the engine and optionally write the report
///
/// # Errors
/// Returns an error if the configuration is invalid, the root cannot be
/// scanned or the report cannot be written. Per-file failures are part of
/// the returned report instead.
pub fn process_files(options: ProcessingOptions) -> Result<ChangeReport> {
    let config_file_path = read_or_create(options.config_path)?;
    let config = load_config(config_file_path)?;

    let engine = RewriteEngine::new(config.rule_set(), config.exclusion_policy()?)
        .dry_run(options.dry_run || config.dry_run)
        .parallel(options.parallel || config.parallel)
        .verify_idempotence(config.verify_idempotence);

    let candidates = scan_directory(&config.root, &config.scan_options())
        .with_context(|| format!("Failed to scan {}", config.root.display()))?;

    info!(
        "Scanned {} candidate files{}",
        candidates.len(),
        if engine.dry_run { " (dry run)" } else { "" }
    );

    let report = engine.run(candidates);

    if let Some(report_path) = &options.report_path {
        let document = serde_yaml::to_string(&report.to_document())
            .context("Failed to serialise the change report")?;
        fs::write(report_path, document)
            .with_context(|| format!("Failed to write report to {}", report_path.display()))?;
        debug!("Report written to {}", report_path.display());
    }

    Ok(report)
}
