//! Config file loading

use crate::domain::SamplePolicy;
use crate::error::{FilelistError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Section name honoured when the settings are nested rather than top-level.
const SECTION: &str = "generate_filelist";

/// Settings that may come from a config file. Every field is optional; the
/// command line overrides whatever is set here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub sample_num: Option<usize>,
    pub policy: Option<SamplePolicy>,
    pub seed: Option<u64>,
    pub sort: Option<bool>,
    pub follow_symlinks: Option<bool>,
}

/// Load settings from `config_path`, or from a config discovered in
/// `search_dir` when no path is given.
///
/// An explicit config that cannot be read or parsed is an error. A discovered
/// one that fails to parse is reported and replaced by defaults.
pub fn load_config(search_dir: &Path, config_path: Option<&Path>) -> Result<FileConfig> {
    let explicit = config_path.is_some();

    let Some(config_file) = config_path.map(Path::to_path_buf).or_else(|| discover_config(search_dir))
    else {
        return Ok(FileConfig::default());
    };

    let parsed = fs::read_to_string(&config_file)
        .map_err(|e| FilelistError::io(&config_file, e))
        .and_then(|content| parse_config(&content, &config_file));

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if explicit => Err(e),
        Err(e) => {
            tracing::warn!("Ignoring auto-discovered config {}: {}", config_file.display(), e);
            Ok(FileConfig::default())
        }
    }
}

fn parse_config(content: &str, config_file: &Path) -> Result<FileConfig> {
    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let invalid = |e: &dyn std::fmt::Display| {
        FilelistError::Config(format!("invalid config {}: {}", config_file.display(), e))
    };

    match ext.as_str() {
        "toml" => {
            let raw: toml::Value = toml::from_str(content).map_err(|e| invalid(&e))?;
            let section = match raw.get(SECTION) {
                Some(nested) => nested.clone(),
                None => raw,
            };
            section.try_into().map_err(|e| invalid(&e))
        }
        "yaml" | "yml" => {
            let raw: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| invalid(&e))?;
            let section = match raw.get(SECTION) {
                Some(nested) => nested.clone(),
                None => raw,
            };
            // An empty YAML document parses to null.
            if section.is_null() {
                return Ok(FileConfig::default());
            }
            serde_yaml::from_value(section).map_err(|e| invalid(&e))
        }
        other => Err(FilelistError::Config(format!(
            "unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ))),
    }
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    let candidates = [
        ".generate_filelist.toml",
        ".generate_filelist.yaml",
        ".generate_filelist.yml",
    ];

    candidates.iter().map(|c| search_dir.join(c)).find(|p| p.is_file())
}
