//! Change reporting
//!
//! This module defines the outcome of a rewrite run.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Why a file could not be processed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// The file could not be read or decoded
    Unreadable,
    /// The transformed content could not be written back
    Unwritable,
}

/// A per-file failure, recorded instead of aborting the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub kind: FailureKind,
    pub message: String,
}

/// What happened to a single candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Content changed and was written (or would be, in a dry run)
    Modified,
    /// No rule changed the content; nothing was written
    Unchanged,
    /// The exclusion policy matched; the file was not read
    Skipped,
    /// Reading or writing failed
    Failed(FileFailure),
}

/// The outcome for one candidate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
    /// Rule-pattern occurrences found in the original content
    pub occurrences: usize,
}

impl FileOutcome {
    pub(crate) fn new(path: &Path, status: FileStatus, occurrences: usize) -> Self {
        FileOutcome {
            path: path.to_path_buf(),
            status,
            occurrences,
        }
    }

    pub fn is_modified(&self) -> bool {
        self.status == FileStatus::Modified
    }

    pub fn error(&self) -> Option<&FileFailure> {
        match &self.status {
            FileStatus::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// The file name, or the full path when it has none
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Aggregate result of a run
///
/// Entries are kept in candidate order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    entries: Vec<FileOutcome>,
    dry_run: bool,
}

impl ChangeReport {
    pub(crate) fn new(entries: Vec<FileOutcome>, dry_run: bool) -> Self {
        ChangeReport { entries, dry_run }
    }

    pub fn entries(&self) -> &[FileOutcome] {
        &self.entries
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Number of candidates, skipped ones included
    pub fn examined(&self) -> usize {
        self.entries.len()
    }

    pub fn modified(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Modified))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Unchanged))
    }

    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Skipped))
    }

    pub fn errored(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Failed(_)))
    }

    /// Total rule-pattern occurrences across all original contents
    pub fn occurrences(&self) -> usize {
        self.entries.iter().map(|entry| entry.occurrences).sum()
    }

    /// Whether every candidate was processed without error
    pub fn is_clean(&self) -> bool {
        self.errored() == 0
    }

    /// Outcome recorded for `path`, if it was a candidate
    pub fn outcome(&self, path: &Path) -> Option<&FileOutcome> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// Serializable view of the report
    pub fn to_document(&self) -> ReportDocument {
        ReportDocument {
            examined: self.examined(),
            modified: self.modified(),
            unchanged: self.unchanged(),
            skipped: self.skipped(),
            errored: self.errored(),
            occurrences: self.occurrences(),
            dry_run: self.dry_run,
            per_file: self
                .entries
                .iter()
                .map(|entry| FileEntryDocument {
                    path: entry.path.display().to_string(),
                    modified: entry.is_modified(),
                    skipped: entry.status == FileStatus::Skipped,
                    occurrences: entry.occurrences,
                    error: entry.error().map(|failure| FileErrorDocument {
                        kind: failure.kind,
                        message: failure.message.clone(),
                    }),
                })
                .collect(),
        }
    }

    fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&FileStatus) -> bool,
    {
        self.entries
            .iter()
            .filter(|entry| predicate(&entry.status))
            .count()
    }
}

/// Structured form of a [`ChangeReport`], as written by `--report`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub examined: usize,
    pub modified: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub errored: usize,
    pub occurrences: usize,
    pub dry_run: bool,
    pub per_file: Vec<FileEntryDocument>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileEntryDocument {
    pub path: String,
    pub modified: bool,
    pub skipped: bool,
    pub occurrences: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FileErrorDocument>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileErrorDocument {
    pub kind: FailureKind,
    pub message: String,
}
