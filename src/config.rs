//! User configuration.
//!
//! Read from a TOML file at `$ASCIIPV_CONFIG`, or
//! `<config_dir>/asciipv/config.toml` when that is unset. A missing file is
//! not an error; every field falls back to its default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PvError;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "ASCIIPV_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Polling interval of the pacing loop in milliseconds
    pub tick_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { tick_ms: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `ASCIIPV_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Location of the config file, if one can be determined.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("asciipv").join("config.toml"))
    }

    /// Load the config from [`config_path`](Self::config_path).
    pub fn load() -> Result<Self, PvError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from `path`, using defaults when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self, PvError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(PvError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&content).map_err(|source| PvError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pacing loop tick, never shorter than one millisecond.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.playback.tick_ms.max(1))
    }
}
