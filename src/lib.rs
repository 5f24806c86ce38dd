//! generate_filelist: walk a directory tree and write the relative paths of
//! files whose names match a glob to a filelist, optionally sampled.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod sample;
pub mod scan;
mod utils;

pub use domain::{FileList, Options, SamplePolicy};
pub use error::{FilelistError, Result};

/// Run the whole pipeline: scan, optionally sample, write.
///
/// The output file is only touched after the scan succeeds.
pub fn generate(options: &Options) -> Result<FileList> {
    validate(options)?;

    let mut list = scan::scan_root(options)?;
    tracing::debug!("{} files match '{}'", list.len(), options.filter);

    if let Some(count) = options.sample_num {
        sample::sample(&mut list, count, options.sample_policy, options.seed);
    }

    list.store(&options.filelist)?;
    Ok(list)
}

fn validate(options: &Options) -> Result<()> {
    if options.root_dir.as_os_str().is_empty() {
        return Err(FilelistError::Usage("--rootdir must not be empty".to_string()));
    }
    if options.filter.is_empty() {
        return Err(FilelistError::Usage("--filter must not be empty".to_string()));
    }
    if options.filelist.as_os_str().is_empty() {
        return Err(FilelistError::Usage("--filelist must not be empty".to_string()));
    }
    Ok(())
}
