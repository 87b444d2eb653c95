//! File discovery module
//!
//! This module contains the candidate scanner and the exclusion policy.

mod exclusion;
mod scanner;

pub use exclusion::ExclusionPolicy;
pub use scanner::{scan_directory, ScanOptions};
