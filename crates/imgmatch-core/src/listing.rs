//! Non-recursive listing of regular files in a directory.

use crate::error::MatchError;
use std::fs;
use std::path::Path;

/// Bare names of the regular files directly inside `dir`, in enumeration order.
///
/// Subdirectories and anything else that is not a regular file are skipped.
/// Symlinks are followed, so a link to a regular file counts; a dangling link
/// does not. Names that are not valid UTF-8 are skipped with a warning since
/// they can never equal a path extracted from text.
pub fn list_local_files(dir: &Path) -> Result<Vec<String>, MatchError> {
    let entries = fs::read_dir(dir).map_err(|e| MatchError::directory_unavailable(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MatchError::directory_unavailable(dir, e))?;
        let path = entry.path();
        let is_file = fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => {
                tracing::warn!("skipping non-UTF-8 file name {:?} in {}", raw, dir.display());
            }
        }
    }

    tracing::debug!("listed {} regular files in {}", names.len(), dir.display());
    Ok(names)
}
