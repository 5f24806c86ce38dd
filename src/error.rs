//! Error taxonomy for filelist generation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilelistError {
    /// Malformed, missing or unknown command-line input.
    #[error("usage error: {0}")]
    Usage(String),

    #[error("root directory not found or not accessible: {}", .path.display())]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid filter pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

impl FilelistError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, FilelistError>;
