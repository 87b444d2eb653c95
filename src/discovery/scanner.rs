//! Directory scanning functionality
//!
//! This module provides the default candidate provider: a glob walk of the
//! root directory, filtered by extension.

use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};
use log::{debug, warn};

use crate::errors::{glob_pattern_error, path_operation_error, Result};
use crate::utils::has_extension;

/// Options controlling which files are offered as candidates
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Extensions to keep, without the leading dot; empty keeps every file
    pub extensions: Vec<String>,
    /// Whether to descend into subdirectories
    pub recursive: bool,
    /// Whether files and directories starting with a dot are included
    pub include_hidden: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            extensions: Vec::new(),
            recursive: true,
            include_hidden: false,
        }
    }
}

/// Scans a directory for candidate files
///
/// The result is sorted so that runs over the same tree visit files in the
/// same order.
///
/// # Arguments
/// * `root` - The directory to scan
/// * `options` - Extension, recursion and hidden-file filters
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - The candidate files
///
/// # Errors
/// Returns an error if the root cannot be expressed as a glob pattern
pub fn scan_directory(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    debug!("Scanning directory: {}", root.display());

    let root_str = root
        .to_str()
        .ok_or_else(|| path_operation_error(root.to_path_buf(), "convert to string"))?;
    let suffix = if options.recursive { "**/*" } else { "*" };
    let pattern = format!("{}/{}", Pattern::escape(root_str), suffix);

    let match_options = MatchOptions {
        require_literal_leading_dot: !options.include_hidden,
        ..MatchOptions::default()
    };

    let entries = glob_with(&pattern, match_options).map_err(|e| glob_pattern_error(e, &pattern))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable entry {}: {}", e.path().display(), e.error());
                None
            }
        })
        .filter(|path| path.is_file())
        .filter(|path| options.extensions.is_empty() || has_extension(path, &options.extensions))
        .collect();

    files.sort();

    debug!("Found {} candidate files", files.len());

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir_all, write};
    use tempfile::tempdir;

    #[test]
    fn test_default_options() {
        let options = ScanOptions::default();
        assert!(options.extensions.is_empty());
        assert!(options.recursive);
        assert!(!options.include_hidden);
    }

    #[test]
    fn test_scan_is_sorted() {
        let dir = tempdir().unwrap();
        write(dir.path().join("b.tsx"), "").unwrap();
        write(dir.path().join("a.tsx"), "").unwrap();
        write(dir.path().join("c.tsx"), "").unwrap();

        let files = scan_directory(dir.path(), &ScanOptions::default()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.tsx", "b.tsx", "c.tsx"]);
    }

    #[test]
    fn test_scan_skips_directories() {
        let dir = tempdir().unwrap();
        create_dir_all(dir.path().join("nested.tsx")).unwrap();
        write(dir.path().join("page.tsx"), "").unwrap();

        let files = scan_directory(dir.path(), &ScanOptions::default()).unwrap();
        assert_eq!(files, vec![dir.path().join("page.tsx")]);
    }
}
