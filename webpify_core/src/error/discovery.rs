//! File discovery error types

use std::path::PathBuf;
use thiserror::Error;

use super::{ErrorKind, stat_kind};

/// Failures that abort a whole discovery run
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The input path could not be inspected
    #[error("failed to get file info for {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input path is a symbolic link that could not be followed to its end
    #[error("failed to resolve symlink {}: {source}", .path.display())]
    SymlinkResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The traversal could not start or continue at the root
    #[error("error walking directory {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl DiscoveryError {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Stat { source, .. } => stat_kind(source),
            Self::SymlinkResolution { .. } => ErrorKind::Stat,
            Self::Walk { .. } => ErrorKind::Walk,
        }
    }

    /// Path the failure refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Stat { path, .. }
            | Self::SymlinkResolution { path, .. }
            | Self::Walk { path, .. } => path,
        }
    }

    /// Whether the underlying cause is a missing path
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
