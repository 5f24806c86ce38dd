//! Configuration loading and merging
//!
//! Settings come from the command line, the environment (via clap), and an
//! optional config file, with precedence CLI > Env > File > Defaults.

pub mod loader;
pub mod merge;

pub use loader::{load_config, FileConfig};
pub use merge::{merge_cli_with_config, CliOverrides};
