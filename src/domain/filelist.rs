//! The ordered list of matched paths.

use crate::error::{FilelistError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Relative file paths under a root directory, in emission order.
///
/// Only the relative paths are serialized; the root is kept so callers can
/// resolve entries back to real files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    root_dir: PathBuf,
    files: Vec<String>,
}

impl FileList {
    pub fn new(root_dir: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self { root_dir: root_dir.into(), files }
    }

    /// Read a filelist previously written by [`FileList::store`].
    pub fn load(root_dir: impl Into<PathBuf>, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| FilelistError::io(path, e))?;
        let files = content.lines().map(str::to_string).collect();
        Ok(Self::new(root_dir, files))
    }

    /// Write one path per line to `path`, replacing it atomically.
    pub fn store(&self, path: &Path) -> Result<()> {
        crate::render::write_filelist(path, &self.files)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    pub fn relative(&self, index: usize) -> Option<&str> {
        self.files.get(index).map(String::as_str)
    }

    /// Root-joined path of entry `index`.
    pub fn absolute(&self, index: usize) -> Option<PathBuf> {
        self.relative(index).map(|rel| self.root_dir.join(rel))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.files
    }

    pub(crate) fn files_mut(&mut self) -> &mut Vec<String> {
        &mut self.files
    }
}
