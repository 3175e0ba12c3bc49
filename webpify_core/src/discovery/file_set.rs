//! Ordered, duplicate-free collection of discovered files

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Regular files produced by discovery, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    paths: Vec<PathBuf>,
    /// Canonical identity of every entry in `paths`
    seen: HashSet<PathBuf>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding exactly one path
    pub fn single(path: PathBuf) -> Self {
        let mut set = Self::new();
        set.insert(path.clone(), path);
        set
    }

    /// Add `path` unless a file with the same canonical `identity` is present
    ///
    /// Returns whether the path was added.
    pub(crate) fn insert(&mut self, path: PathBuf, identity: PathBuf) -> bool {
        if !self.seen.insert(identity) {
            return false;
        }
        self.paths.push(path);
        true
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl IntoIterator for FileSet {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
