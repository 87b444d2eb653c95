use std::fs::create_dir_all;
use std::path::Path;

use directories::ProjectDirs;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{file_operation_error, generic_error, Result};

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            file_operation_error(e, folder.config_dir().to_path_buf(), "create directory")
        })?;
    }
    Ok(folder)
}

/// Whether the extension of `path` is one of `extensions`, ignoring case
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            extensions
                .iter()
                .any(|wanted| wanted.eq_ignore_ascii_case(extension))
        })
}
