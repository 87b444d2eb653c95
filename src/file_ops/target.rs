//! Whole-file reading
//!
//! A file is read into memory in one go and decoded as strict UTF-8. Bytes
//! are kept exactly, including any byte order mark, so an unchanged file
//! compares equal to what is on disk.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::UTF_8;
use log::trace;

use crate::errors::{file_operation_error, invalid_encoding_error, Result};

/// The original content of a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    path: PathBuf,
    original: String,
}

impl FileTarget {
    /// Reads and decodes the file at `path`
    ///
    /// # Errors
    /// * [`crate::errors::Error::FileOperation`] if the file cannot be read
    /// * [`crate::errors::Error::InvalidEncoding`] if it is not valid UTF-8
    pub fn read(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;

        let original = UTF_8
            .decode_without_bom_handling_and_without_replacement(&bytes)
            .ok_or_else(|| invalid_encoding_error(path.to_path_buf()))?
            .into_owned();

        trace!("Read {} bytes from {}", bytes.len(), path.display());

        Ok(FileTarget {
            path: path.to_path_buf(),
            original,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn original(&self) -> &str {
        &self.original
    }
}
