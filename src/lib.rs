//! Bulk literal rewriting of source trees
//!
//! A [`rules::RuleSet`] holds ordered literal substitutions. The
//! [`workflow::RewriteEngine`] applies it to candidate files, writes back only
//! the files that changed and returns a [`workflow::ChangeReport`].
//!
//! ```
//! use file_rewrite::prelude::*;
//!
//! let rule_set = RuleSet::from_pairs([(
//!     "bg-white rounded-xl",
//!     "bg-white dark:bg-[#1E1E1E] rounded-xl",
//! )])?;
//!
//! assert_eq!(
//!     rule_set.apply(r#"<div className="bg-white rounded-xl">"#),
//!     r#"<div className="bg-white dark:bg-[#1E1E1E] rounded-xl">"#
//! );
//! # Ok::<(), file_rewrite::errors::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod rules;
mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::discovery::{scan_directory, ExclusionPolicy, ScanOptions};
    pub use crate::errors::{
        file_operation_error, generic_error, glob_pattern_error,
        invalid_encoding_error, invalid_rule_error, path_operation_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{format_message, init_logger, LogLevel};
    pub use crate::rules::{Rule, RuleSet};
    pub use crate::workflow::{
        process_files, render_summary, ChangeReport, FileStatus, ProcessingOptions, RewriteEngine,
    };
}
