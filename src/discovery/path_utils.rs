use std::path::{Path, PathBuf};

use crate::core::error::Result;

/// Turn a path into an absolute path without touching the filesystem.
///
/// Relative paths are joined onto the current working directory. Symlinks
/// are not resolved and `.`/`..` components are kept as-is, matching what
/// the host filesystem API would accept.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
