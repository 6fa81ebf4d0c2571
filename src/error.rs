//! Library error type.

use std::path::PathBuf;

/// Errors that can occur while configuring or running playback.
#[derive(Debug, thiserror::Error)]
pub enum PvError {
    #[error("Invalid frame rate '{0}': expected N, N/D or a decimal, greater than zero")]
    InvalidFrameRate(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to install Ctrl-C handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
