//! File discovery
//!
//! Turns one input path into the ordered, duplicate-free set of regular files
//! to consider for conversion. Symbolic links are replaced by their resolved
//! targets and directory trees are walked without following links.

mod file_set;
mod resolve;
mod walker;

pub use file_set::FileSet;

use crate::error::DiscoveryError;
use log::debug;
use std::fs;
use std::path::Path;

/// Result type for file discovery operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Find every regular file reachable from `input`
///
/// - a regular file yields itself
/// - a symbolic link yields its resolved target if that is a regular file,
///   nothing otherwise; a link that cannot be resolved is an error
/// - a directory is walked recursively; links inside it count only when
///   they resolve to a regular file, and are never descended into
/// - anything else yields nothing
pub fn find_files(input: &Path) -> Result<FileSet> {
    // Classify the link itself, not its target.
    let metadata = fs::symlink_metadata(input).map_err(|source| DiscoveryError::Stat {
        path: input.to_path_buf(),
        source,
    })?;
    let file_type = metadata.file_type();

    if file_type.is_symlink() {
        let resolved =
            resolve::resolve_link(input).map_err(|source| DiscoveryError::SymlinkResolution {
                path: input.to_path_buf(),
                source,
            })?;
        let target = fs::metadata(&resolved).map_err(|source| DiscoveryError::Stat {
            path: resolved.clone(),
            source,
        })?;

        debug!(
            "Input {} is a symlink to {}",
            input.display(),
            resolved.display()
        );
        return Ok(if target.is_file() {
            FileSet::single(resolved)
        } else {
            FileSet::new()
        });
    }

    if file_type.is_dir() {
        return walker::walk_directory(input);
    }

    if file_type.is_file() {
        return Ok(FileSet::single(input.to_path_buf()));
    }

    debug!("Input {} is not a regular file, ignoring", input.display());
    Ok(FileSet::new())
}
