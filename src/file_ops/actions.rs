//! Whole-file writing
//!
//! New content is written to a temporary file next to the resolved target and
//! then moved over it, so a failed write leaves the original untouched.
//! Symlinks are followed; the file they point to receives the content.

use std::fs::{self, File, Metadata};
use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::errors::{file_operation_error, path_operation_error, Result};

/// Replaces the content of `path` with `content`
///
/// The target keeps its permissions. A file with more than one hard link is
/// rewritten in place so every link sees the new content; such a write is
/// not atomic.
///
/// # Errors
/// Returns an error if the target cannot be resolved, the temporary file
/// cannot be created or written, or if it cannot replace the target.
pub fn write_contents(path: &Path, content: &str) -> Result<()> {
    let target =
        fs::canonicalize(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;

    let metadata =
        fs::metadata(&target).map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;

    if is_hard_linked(&metadata) {
        write_in_place(&target, content)
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;
        debug!("Wrote {} bytes in place to {}", content.len(), target.display());
        return Ok(());
    }

    let parent = target
        .parent()
        .ok_or_else(|| path_operation_error(target.clone(), "get parent directory of"))?;

    let mut temporary = NamedTempFile::new_in(parent)
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;

    temporary
        .write_all(content.as_bytes())
        .and_then(|_| temporary.as_file().sync_all())
        .and_then(|_| temporary.as_file().set_permissions(metadata.permissions()))
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;

    temporary
        .persist(&target)
        .map_err(|e| file_operation_error(e.error, path.to_path_buf(), "write"))?;

    debug!("Wrote {} bytes to {}", content.len(), target.display());

    Ok(())
}

fn write_in_place(target: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::options().write(true).truncate(true).open(target)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

#[cfg(unix)]
fn is_hard_linked(metadata: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;

    metadata.nlink() > 1
}

#[cfg(not(unix))]
fn is_hard_linked(_metadata: &Metadata) -> bool {
    false
}
