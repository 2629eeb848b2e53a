//! core/config.rs
//!
//! App settings: `<config_dir>/spotimote/config.toml`, then env overrides.
//! A missing file is normal (defaults). Env wins over the file so a token can
//! be supplied without writing it to disk.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Wait between a command and its confirming poll.
pub const DEFAULT_REPOLL_DELAY_MS: u64 = 100;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const ENV_ACCESS_TOKEN: &str = "SPOTIFY_ACCESS_TOKEN";
pub const ENV_API_BASE_URL: &str = "SPOTIMOTE_API_BASE_URL";
pub const ENV_REPOLL_DELAY_MS: &str = "SPOTIMOTE_REPOLL_DELAY_MS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub access_token: Option<String>,
    pub repoll_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub theme: ThemeChoice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            access_token: None,
            repoll_delay_ms: DEFAULT_REPOLL_DELAY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            theme: ThemeChoice::default(),
        }
    }
}

impl AppConfig {
    /// Default file + process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// `None` when the platform has no config dir.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("spotimote").join("config.toml"))
    }

    /// Missing file -> defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlay env values. `lookup` is `std::env::var` in production.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(token) = lookup(ENV_ACCESS_TOKEN) {
            self.access_token = Some(token);
        }
        if let Some(url) = lookup(ENV_API_BASE_URL) {
            self.api_base_url = url;
        }
        if let Some(raw) = lookup(ENV_REPOLL_DELAY_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.repoll_delay_ms = ms,
                Err(_) => tracing::warn!(value = %raw, "ignoring non-numeric {ENV_REPOLL_DELAY_MS}"),
            }
        }
    }

    pub fn repoll_delay(&self) -> Duration {
        Duration::from_millis(self.repoll_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
