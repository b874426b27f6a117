//! Atomic artifact writes

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::errors::{BuildError, BuildResult};

/// Write `contents` to `path`, creating missing parent directories
///
/// The text goes to a temporary file in the target directory first and is
/// then renamed over `path`, so a failed build never leaves a truncated
/// header behind.
///
/// # Errors
///
/// Returns `BuildError::Io` if the directory cannot be created or the file
/// cannot be written or renamed.
pub fn write_artifact(path: &Path, contents: &str) -> BuildResult<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent_dir).map_err(|e| BuildError::io(parent_dir, e))?;

    // Create temp file in same directory as target so the rename stays atomic
    let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| BuildError::io(parent_dir, e))?;
    temp_file
        .write_all(contents.as_bytes())
        .map_err(|e| BuildError::io(path, e))?;
    temp_file
        .persist(path)
        .map_err(|e| BuildError::io(path, e.error))?;

    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
