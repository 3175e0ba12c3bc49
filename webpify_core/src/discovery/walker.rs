//! Directory walker for file discovery
//!
//! Walks a tree with walkdir in file-name order without following links.
//! Links are only ever considered as pointers to files and are never
//! descended into, so link cycles cannot trap the walk.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FileSet, Result, resolve::resolve_file_link};
use crate::error::DiscoveryError;

/// Collect the regular files under `root`
///
/// Unreadable entries below the root are logged and skipped. Only a failure
/// at the root itself aborts the walk.
pub(crate) fn walk_directory(root: &Path) -> Result<FileSet> {
    let identity = Identity::new(root);
    let mut files = FileSet::new();

    let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(DiscoveryError::Walk {
                    path: root.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                log::warn!("Walk error: {e}");
                continue;
            }
        };

        let file_type = entry.file_type();

        if file_type.is_file() {
            let key = identity.of(entry.path());
            if !files.insert(entry.into_path(), key) {
                log::debug!("Skipping file already reached through a symlink");
            }
        } else if file_type.is_symlink()
            && let Some(target) = resolve_file_link(entry.path())
        {
            log::debug!(
                "Symlink {} resolves to {}",
                entry.path().display(),
                target.display()
            );
            files.insert(target.clone(), target);
        }
    }

    log::debug!("Found {} file(s) under {}", files.len(), root.display());
    Ok(files)
}

/// Maps walked paths to canonical paths for de-duplication
///
/// The walk never follows links, so every path below the root is the
/// canonical root joined with the same relative suffix.
struct Identity {
    root: PathBuf,
    canonical_root: Option<PathBuf>,
}

impl Identity {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            canonical_root: fs::canonicalize(root).ok(),
        }
    }

    fn of(&self, path: &Path) -> PathBuf {
        match (&self.canonical_root, path.strip_prefix(&self.root)) {
            (Some(canonical), Ok(relative)) => canonical.join(relative),
            _ => path.to_path_buf(),
        }
    }
}
