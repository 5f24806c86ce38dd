//! Command-line interface for generate_filelist
//!
//! Parses flags, wires logging, resolves configuration, then runs the
//! scan → sample → write pipeline.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{Options, SamplePolicy};

/// Walk a directory tree and write the relative paths of files matching a
/// glob to a filelist, one per line
#[derive(Parser, Debug)]
#[command(name = "generate_filelist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File root directory
    #[arg(short = 'd', long = "rootdir", value_name = "ROOTDIR")]
    pub rootdir: PathBuf,

    /// File name filter, e.g. "*.png"; patterns containing '/' match the relative path
    #[arg(
        short = 'f',
        long = "filter",
        value_name = "FILTER",
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub filter: String,

    /// Output file name
    #[arg(short = 'o', long = "filelist", value_name = "FILELIST")]
    pub filelist: PathBuf,

    /// Maximum number of entries to emit
    #[arg(short = 'n', long = "sample_num", value_name = "SAMPLE_NUM")]
    pub sample_num: Option<usize>,

    /// How entries are chosen when sampling
    #[arg(long, value_enum, value_name = "POLICY")]
    pub policy: Option<SamplePolicy>,

    /// Seed for random sampling
    #[arg(long, env = "FILELIST_SEED", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Sort entries by name within each directory
    #[arg(long)]
    pub sort: bool,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Config file (defaults to .generate_filelist.{toml,yaml,yml} in the current directory)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            root_dir: self.rootdir.clone(),
            filter: self.filter.clone(),
            filelist: self.filelist.clone(),
            sample_num: self.sample_num,
            policy: self.policy,
            seed: self.seed,
            sort: self.sort,
            follow_symlinks: self.follow_symlinks,
        }
    }

    /// Resolve the run options, consulting the config file.
    pub fn resolve(&self) -> Result<Options> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let file_config = load_config(&cwd, self.config.as_deref())?;
        Ok(merge_cli_with_config(self.overrides(), file_config))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let options = cli.resolve()?;
    tracing::debug!("Resolved options: {:?}", options);

    let list = crate::generate(&options)
        .with_context(|| format!("Failed to generate {}", options.filelist.display()))?;
    tracing::info!("Wrote {} entries to {}", list.len(), options.filelist.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from([
            "generate_filelist",
            "-d",
            "images",
            "-f",
            "*.jpg",
            "-o",
            "list.txt",
            "-n",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.rootdir, PathBuf::from("images"));
        assert_eq!(cli.filter, "*.jpg");
        assert_eq!(cli.filelist, PathBuf::from("list.txt"));
        assert_eq!(cli.sample_num, Some(10));
    }

    #[test]
    fn parses_long_flags() {
        let cli = Cli::try_parse_from([
            "generate_filelist",
            "--rootdir",
            "images",
            "--filter",
            "*.png",
            "--filelist",
            "out.txt",
            "--sample_num",
            "3",
            "--policy",
            "prefix",
        ])
        .unwrap();
        assert_eq!(cli.filter, "*.png");
        assert_eq!(cli.sample_num, Some(3));
        assert_eq!(cli.policy, Some(SamplePolicy::Prefix));
    }

    #[test]
    fn missing_required_flag_is_rejected() {
        let err = Cli::try_parse_from(["generate_filelist", "-d", "images", "-f", "*.jpg"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("--filelist"));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = Cli::try_parse_from([
            "generate_filelist",
            "-d",
            "images",
            "-f",
            "*.jpg",
            "-o",
            "list.txt",
            "-x",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn malformed_sample_num_is_rejected() {
        let err = Cli::try_parse_from([
            "generate_filelist",
            "-d",
            "images",
            "-f",
            "*.jpg",
            "-o",
            "list.txt",
            "-n",
            "many",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn empty_filter_is_rejected() {
        let err = Cli::try_parse_from([
            "generate_filelist",
            "-d",
            "images",
            "-f",
            "",
            "-o",
            "list.txt",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn missing_value_is_rejected() {
        let result = Cli::try_parse_from(["generate_filelist", "-d", "images", "-f", "*.jpg", "-o"]);
        assert!(result.is_err());
    }
}
