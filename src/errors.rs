use glob::PatternError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the rewrite engine
#[derive(Debug)]
pub enum Error {
    /// Error related to reading or writing a file
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error when file content is not valid UTF-8
    InvalidEncoding { path: PathBuf },
    /// Error when a rule cannot be constructed
    InvalidRule { detail: String },
    /// Error related to glob pattern matching
    GlobPattern {
        source: PatternError,
        pattern: String,
    },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                source,
                path,
                operation,
            } => {
                write!(
                    f,
                    "Failed to {} file: {} ({})",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::InvalidEncoding { path } => {
                write!(f, "File is not valid UTF-8: {}", path.display())
            }
            Error::InvalidRule { detail } => {
                write!(f, "Invalid rule: {detail}")
            }
            Error::GlobPattern { pattern, .. } => {
                write!(f, "Invalid glob pattern: {pattern}")
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::GlobPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "access".to_string(),
        }
    }
}

impl From<PatternError> for Error {
    fn from(err: PatternError) -> Self {
        Error::GlobPattern {
            source: err,
            pattern: String::new(),
        }
    }
}

/// Custom Result type for the rewrite engine
///
/// # Examples
/// ```
/// use file_rewrite::prelude::{Result, invalid_rule_error};
///
/// fn checked_pattern(pattern: &str) -> Result<&str> {
///     if pattern.is_empty() {
///         return Err(invalid_rule_error("pattern must not be empty"));
///     }
///     Ok(pattern)
/// }
///
/// assert!(checked_pattern("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid encoding error
pub fn invalid_encoding_error(path: PathBuf) -> Error {
    Error::InvalidEncoding { path }
}

/// Helper function to create an invalid rule error
pub fn invalid_rule_error(detail: &str) -> Error {
    Error::InvalidRule {
        detail: detail.to_string(),
    }
}

/// Helper function to create a glob pattern error
pub fn glob_pattern_error(err: PatternError, pattern: &str) -> Error {
    Error::GlobPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
