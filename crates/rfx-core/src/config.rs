//! Configuration management for RFX.
//!
//! Loads configuration from ${RFX_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for RFX configuration and data directories.
    //!
    //! RFX_HOME resolution order:
    //! 1. RFX_HOME environment variable (if set)
    //! 2. ~/.config/rfx (default)

    use std::path::PathBuf;

    /// Returns the RFX home directory.
    ///
    /// Checks RFX_HOME env var first, falls back to ~/.config/rfx
    pub fn rfx_home() -> PathBuf {
        if let Ok(home) = std::env::var("RFX_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("rfx"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        rfx_home().join("config.toml")
    }

    /// Returns the path to the stored session file.
    pub fn session_path() -> PathBuf {
        rfx_home().join("session.toml")
    }

    /// Returns the path to the TUI log file.
    pub fn log_path() -> PathBuf {
        rfx_home().join("rfx.log")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the procurement backend.
    pub api_base_url: String,

    /// Delay between typewriter reveal ticks, in milliseconds.
    ///
    /// Clamped to at least 1 on load; the revealer requires a positive
    /// cadence.
    pub reveal_interval_ms: u64,

    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Default page size for paginated listings.
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
            reveal_interval_ms: Self::DEFAULT_REVEAL_INTERVAL_MS,
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
    const DEFAULT_REVEAL_INTERVAL_MS: u64 = 15;
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
    const DEFAULT_PAGE_SIZE: u32 = 10;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Environment variable overriding the backend base URL.
    ///
    /// Resolution order: env > config file > default.
    pub const API_BASE_URL_ENV: &str = "RFX_API_BASE_URL";

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config: Config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            Config::default()
        };

        if let Ok(base_url) = std::env::var(Self::API_BASE_URL_ENV) {
            let trimmed = base_url.trim();
            if !trimmed.is_empty() {
                config.api_base_url = trimmed.to_string();
            }
        }

        // A zero tick interval is a contract violation for the revealer;
        // guard it here so no caller ever sees one.
        if config.reveal_interval_ms == 0 {
            config.reveal_interval_ms = 1;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api_base_url)
            .with_context(|| format!("Invalid api_base_url: {}", self.api_base_url))?;
        Ok(())
    }

    /// Returns the reveal tick interval as a `Duration`.
    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    /// Returns the HTTP request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.reveal_interval_ms, 15);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_base_url = \"http://procurement.internal:9000\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_base_url, "http://procurement.internal:9000");
        assert_eq!(config.reveal_interval_ms, 15);
    }

    #[test]
    fn zero_reveal_interval_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "reveal_interval_ms = 0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.reveal_interval_ms, 1);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_base_url = \"not a url\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
