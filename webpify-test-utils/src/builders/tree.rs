//! Scratch directory trees

use super::SampleImage;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory with helpers for laying out files
///
/// The directory is removed when the tree is dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Root of the tree
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `relative` inside the tree
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Create a directory (and its parents)
    pub fn dir(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.join(relative);
        fs::create_dir_all(&path).expect("create directory");
        path
    }

    /// Write a file with raw contents, creating parent directories
    pub fn file(&self, relative: impl AsRef<Path>, contents: &[u8]) -> PathBuf {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    /// Write an encoded sample image
    pub fn image(&self, relative: impl AsRef<Path>, sample: SampleImage) -> PathBuf {
        self.file(relative, &sample.encode())
    }

    /// Create a symbolic link at `relative` pointing to `target`
    #[cfg(unix)]
    pub fn symlink(&self, relative: impl AsRef<Path>, target: impl AsRef<Path>) -> PathBuf {
        let link = self.join(relative);
        if let Some(parent) = link.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        std::os::unix::fs::symlink(target, &link).expect("create symlink");
        link
    }

    /// Canonical form of a path inside the tree
    pub fn canonical(&self, relative: impl AsRef<Path>) -> PathBuf {
        fs::canonicalize(self.join(relative)).expect("canonicalize")
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
