//! Merge command-line values with config file settings

use super::loader::FileConfig;
use crate::domain::{Options, SamplePolicy};
use std::path::PathBuf;

/// Values taken from the command line. Optional fields left as `None` fall
/// through to the config file, then to defaults.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub root_dir: PathBuf,
    pub filter: String,
    pub filelist: PathBuf,
    pub sample_num: Option<usize>,
    pub policy: Option<SamplePolicy>,
    pub seed: Option<u64>,
    pub sort: bool,
    pub follow_symlinks: bool,
}

/// Resolve the final [`Options`] with precedence CLI > config file > defaults.
pub fn merge_cli_with_config(cli: CliOverrides, file: FileConfig) -> Options {
    let mut options = Options::new(cli.root_dir, cli.filter, cli.filelist);
    options.sample_num = cli.sample_num.or(file.sample_num);
    options.sample_policy = cli.policy.or(file.policy).unwrap_or_default();
    options.seed = cli.seed.or(file.seed).unwrap_or(0);
    // Boolean switches can only turn a setting on from the command line.
    options.sort = cli.sort || file.sort.unwrap_or(false);
    options.follow_symlinks = cli.follow_symlinks || file.follow_symlinks.unwrap_or(false);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli() -> CliOverrides {
        CliOverrides {
            root_dir: PathBuf::from("images"),
            filter: "*.jpg".to_string(),
            filelist: PathBuf::from("list.txt"),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let options = merge_cli_with_config(cli(), FileConfig::default());
        assert_eq!(options, Options::new("images", "*.jpg", "list.txt"));
    }

    #[test]
    fn config_fills_unset_values() {
        let file = FileConfig {
            sample_num: Some(10),
            policy: Some(SamplePolicy::Prefix),
            seed: Some(5),
            sort: Some(true),
            follow_symlinks: Some(true),
        };
        let options = merge_cli_with_config(cli(), file);
        assert_eq!(options.sample_num, Some(10));
        assert_eq!(options.sample_policy, SamplePolicy::Prefix);
        assert_eq!(options.seed, 5);
        assert!(options.sort);
        assert!(options.follow_symlinks);
    }

    #[test]
    fn cli_wins_over_config() {
        let overrides = CliOverrides {
            sample_num: Some(3),
            policy: Some(SamplePolicy::Random),
            seed: Some(1),
            ..cli()
        };
        let file = FileConfig {
            sample_num: Some(10),
            policy: Some(SamplePolicy::Prefix),
            seed: Some(5),
            ..Default::default()
        };
        let options = merge_cli_with_config(overrides, file);
        assert_eq!(options.sample_num, Some(3));
        assert_eq!(options.sample_policy, SamplePolicy::Random);
        assert_eq!(options.seed, 1);
    }
}
