//! Candidate exclusion
//!
//! Excluded paths are never read or written. Exclusions exist for files a
//! different migration already covers, where re-applying the rules would be
//! wrong.

use std::path::Path;

use glob::Pattern;

use crate::errors::{glob_pattern_error, Result};

/// Decides which candidates the engine must skip
///
/// A path is excluded when its string form contains any marker, or when it
/// matches any glob pattern.
#[derive(Debug, Clone, Default)]
pub struct ExclusionPolicy {
    markers: Vec<String>,
    patterns: Vec<Pattern>,
}

impl ExclusionPolicy {
    /// A policy that excludes nothing
    pub fn none() -> Self {
        ExclusionPolicy::default()
    }

    /// Builds a policy from substring markers and glob patterns
    ///
    /// # Errors
    /// Returns an error if any glob pattern is invalid
    pub fn new<M, G>(markers: M, globs: G) -> Result<Self>
    where
        M: IntoIterator,
        M::Item: Into<String>,
        G: IntoIterator,
        G::Item: AsRef<str>,
    {
        let patterns = globs
            .into_iter()
            .map(|glob| {
                let glob = glob.as_ref();
                Pattern::new(glob).map_err(|e| glob_pattern_error(e, glob))
            })
            .collect::<Result<Vec<Pattern>>>()?;

        Ok(ExclusionPolicy {
            markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|marker: &String| !marker.is_empty())
                .collect(),
            patterns,
        })
    }

    /// Adds a substring marker
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        if !marker.is_empty() {
            self.markers.push(marker);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.patterns.is_empty()
    }

    /// Whether `path` must be skipped
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.markers
            .iter()
            .any(|marker| path_str.contains(marker.as_str()))
            || self.patterns.iter().any(|pattern| pattern.matches_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_empty_policy_excludes_nothing() {
        let policy = ExclusionPolicy::none();
        assert!(policy.is_empty());
        assert!(!policy.is_excluded(Path::new("admin/AdminSettingsPage.tsx")));
    }

    #[test]
    fn test_marker_matches_substring() {
        let policy = ExclusionPolicy::none().with_marker("AdminSettingsPage");
        assert!(policy.is_excluded(Path::new("pages/admin/AdminSettingsPage.tsx")));
        assert!(policy.is_excluded(Path::new("pages/AdminSettingsPage/index.tsx")));
        assert!(!policy.is_excluded(Path::new("pages/admin/AdminUsersPage.tsx")));
    }

    #[test]
    fn test_empty_marker_is_ignored() {
        let policy = ExclusionPolicy::new(vec![""], Vec::<String>::new()).unwrap();
        assert!(policy.is_empty());
        assert!(!policy.is_excluded(&PathBuf::from("page.tsx")));
    }

    #[test]
    fn test_glob_patterns() {
        let policy = ExclusionPolicy::new(Vec::<String>::new(), ["**/generated/**"]).unwrap();
        assert!(policy.is_excluded(Path::new("src/generated/types.tsx")));
        assert!(!policy.is_excluded(Path::new("src/pages/types.tsx")));
    }

    #[test]
    fn test_invalid_glob_is_rejected() {
        let result = ExclusionPolicy::new(Vec::<String>::new(), ["src/["]);
        assert!(result.is_err());
    }
}
