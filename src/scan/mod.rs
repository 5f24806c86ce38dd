//! Directory scanning with glob filtering

use crate::domain::{FileList, Options};
use crate::error::Result;

pub mod scanner;

pub use scanner::{FileFilter, FileScanner};

/// Walk `options.root_dir` and collect the files matching `options.filter`.
pub fn scan_root(options: &Options) -> Result<FileList> {
    let filter = FileFilter::new(&options.filter)?;
    let mut scanner = FileScanner::new(options.root_dir.clone())
        .follow_symlinks(options.follow_symlinks)
        .sort(options.sort);
    let list = scanner.scan(&filter)?;
    if scanner.skipped_entries() > 0 {
        tracing::warn!(
            "{} entries under {} were unreadable or not valid UTF-8 and were left out",
            scanner.skipped_entries(),
            options.root_dir.display()
        );
    }
    Ok(list)
}
