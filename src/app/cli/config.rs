//! TOML configuration file loading
//!
//! Values from the config file seed defaults for flags the user did not pass;
//! command-line arguments always win. An explicitly given path must exist,
//! while the default location is optional.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Module-local result type for config loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", path.display())]
    Missing { path: PathBuf },

    #[error("Error reading configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parsed configuration file contents.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
    pub stamp: StampConfig,
    pub watch: WatchConfig,
}

/// `[stamp]` section: manifest writer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StampConfig {
    pub out_dir: Option<PathBuf>,
    pub file_name: Option<String>,
    pub strategy: Option<String>,
}

/// `[watch]` section: poller defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub url: Option<String>,
    pub interval: Option<u64>,
}

impl FileConfig {
    /// Load configuration, preferring an explicitly given path over the
    /// default location. Returns empty defaults when no file exists.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::Missing {
                        path: path.to_path_buf(),
                    });
                }
                Some(path.to_path_buf())
            }
            None => default_config_path().filter(|p| p.exists()),
        };

        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            source: e,
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("versionwatch").join("versionwatch.toml"))
}
