//! Core data types shared by every stage of the pipeline.

use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

pub mod filelist;

pub use filelist::FileList;

/// How `--sample_num` reduces the matched list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SamplePolicy {
    /// Seeded uniform sample without replacement, kept in enumeration order.
    #[default]
    Random,
    /// The first N entries.
    Prefix,
}

/// Fully resolved run options. Built once, then only borrowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub root_dir: PathBuf,
    pub filter: String,
    pub filelist: PathBuf,
    pub sample_num: Option<usize>,
    pub sample_policy: SamplePolicy,
    pub seed: u64,
    pub follow_symlinks: bool,
    pub sort: bool,
}

impl Options {
    /// Options with defaults for everything but the three required values.
    pub fn new(
        root_dir: impl Into<PathBuf>,
        filter: impl Into<String>,
        filelist: impl Into<PathBuf>,
    ) -> Self {
        Self {
            root_dir: root_dir.into(),
            filter: filter.into(),
            filelist: filelist.into(),
            sample_num: None,
            sample_policy: SamplePolicy::default(),
            seed: 0,
            follow_symlinks: false,
            sort: false,
        }
    }
}
