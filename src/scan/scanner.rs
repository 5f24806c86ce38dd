//! Directory walker with glob filtering

use crate::domain::FileList;
use crate::error::{FilelistError, Result};
use crate::utils::normalize_path;
use globset::{GlobBuilder, GlobMatcher};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Compiled filter.
///
/// A pattern without `/` is tested against the file's base name. A pattern
/// with `/` is tested against the relative path, where `*` and `?` stop at `/`
/// and `**` spans directory levels. Such a pattern may start at any depth:
/// `a/*.jpg` behaves as `**/a/*.jpg`.
#[derive(Debug, Clone)]
pub struct FileFilter {
    matcher: GlobMatcher,
    whole_path: bool,
}

impl FileFilter {
    pub fn new(pattern: &str) -> Result<Self> {
        let whole_path = pattern.contains('/');
        let anchored = if whole_path && !pattern.starts_with("**/") {
            format!("**/{}", pattern)
        } else {
            pattern.to_string()
        };
        let glob = GlobBuilder::new(&anchored).literal_separator(true).build().map_err(|source| {
            FilelistError::InvalidPattern { pattern: pattern.to_string(), source }
        })?;
        Ok(Self { matcher: glob.compile_matcher(), whole_path })
    }

    /// Test a file given its path relative to the root and its base name.
    pub fn is_match(&self, rel_path: &Path, file_name: &OsStr) -> bool {
        if self.whole_path {
            self.matcher.is_match(rel_path)
        } else {
            self.matcher.is_match(file_name)
        }
    }
}

/// Walks a root directory and collects files whose names match a filter.
pub struct FileScanner {
    root_path: PathBuf,
    follow_symlinks: bool,
    sort: bool,
    skipped_entries: usize,
}

impl FileScanner {
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path, follow_symlinks: false, sort: false, skipped_entries: 0 }
    }

    /// Set whether to follow symbolic links
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Sort entries by file name within each directory instead of using the
    /// filesystem's enumeration order.
    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Number of entries left out of the last scan because they could not be
    /// read or their paths are not valid UTF-8.
    pub fn skipped_entries(&self) -> usize {
        self.skipped_entries
    }

    fn check_root(&self) -> Result<()> {
        let not_found = |source| FilelistError::DirectoryNotFound {
            path: self.root_path.clone(),
            source,
        };
        let metadata = fs::metadata(&self.root_path).map_err(not_found)?;
        if !metadata.is_dir() {
            return Err(not_found(std::io::Error::other("not a directory")));
        }
        // Surfaces permission problems before anything else happens.
        fs::read_dir(&self.root_path).map_err(not_found)?;
        Ok(())
    }

    /// Walk the root and return every regular file accepted by `filter`.
    pub fn scan(&mut self, filter: &FileFilter) -> Result<FileList> {
        self.skipped_entries = 0;
        self.check_root()?;

        let mut walker =
            WalkDir::new(&self.root_path).min_depth(1).follow_links(self.follow_symlinks);
        if self.sort {
            walker = walker.sort_by_file_name();
        }

        let mut files = Vec::new();
        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry: {}", err);
                    self.skipped_entries += 1;
                    continue;
                }
            };

            if !is_file_entry(&entry) {
                continue;
            }

            let Ok(rel) = entry.path().strip_prefix(&self.root_path) else {
                continue;
            };
            if !filter.is_match(rel, entry.file_name()) {
                continue;
            }

            match normalize_path(rel) {
                Some(rel_path) => {
                    tracing::trace!("Matched {}", rel_path);
                    files.push(rel_path);
                }
                None => {
                    tracing::warn!("Skipping non-UTF-8 path: {}", entry.path().display());
                    self.skipped_entries += 1;
                }
            }
        }

        tracing::debug!(
            "Scanned {}: {} matches, {} skipped",
            self.root_path.display(),
            files.len(),
            self.skipped_entries
        );

        Ok(FileList::new(self.root_path.clone(), files))
    }
}

/// Regular files, plus links to regular files when links are not followed.
fn is_file_entry(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
