//! Symbolic link resolution

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Follow a chain of links to its final, canonical target
pub(crate) fn resolve_link(path: &Path) -> io::Result<PathBuf> {
    fs::canonicalize(path)
}

/// Resolve a link found during a walk, keeping it only if it ends at a regular file
///
/// Broken links, loops and targets that vanish between resolution and stat
/// all yield `None`.
pub(crate) fn resolve_file_link(path: &Path) -> Option<PathBuf> {
    let resolved = match resolve_link(path) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::debug!("Skipping unresolvable symlink {}: {e}", path.display());
            return None;
        }
    };

    match fs::metadata(&resolved) {
        Ok(metadata) if metadata.is_file() => Some(resolved),
        Ok(_) => None,
        Err(e) => {
            log::debug!(
                "Skipping symlink {} (target {}): {e}",
                path.display(),
                resolved.display()
            );
            None
        }
    }
}
