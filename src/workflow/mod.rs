//! Workflow module
//!
//! This module contains the rewrite engine, its report, and the workflow
//! that runs it from a configuration file.

mod engine;
pub mod report;
pub mod summary;

pub use engine::{process_files, ProcessingOptions, RewriteEngine};
pub use report::{ChangeReport, FailureKind, FileFailure, FileOutcome, FileStatus};
pub use summary::render_summary;
