//! User configuration loaded from `config.toml`.
//!
//! Resolution order for the config directory:
//! 1. `--config-dir` flag (or `NORDTRAY_CONFIG_DIR`)
//! 2. Platform config root, e.g. `~/.config/nordtray`
//! 3. `./.nordtray` when no platform root exists
//!
//! A missing file means defaults. Every key is optional.
//!
//! ```toml
//! binary = "/usr/bin/nordvpn"
//! status_poll_secs = 5
//! tick_rate_ms = 1000
//! toast_secs = 3
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants;
use crate::error::{Error, Result};

/// Settings for nordtray itself (not the VPN client's settings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Program name or path of the VPN client.
    pub binary: String,
    /// Seconds between status polls in the indicator.
    pub status_poll_secs: u64,
    /// Milliseconds between UI ticks.
    pub tick_rate_ms: u64,
    /// Seconds a notification stays visible.
    pub toast_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            binary: constants::DEFAULT_BINARY.to_string(),
            status_poll_secs: constants::DEFAULT_STATUS_POLL_SECS,
            tick_rate_ms: constants::DEFAULT_TICK_RATE,
            toast_secs: constants::DEFAULT_TOAST_SECS,
        }
    }
}

impl AppConfig {
    /// Loads `config.toml` from `dir`, falling back to defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(constants::CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|source| Error::Config { path, source })
    }

    pub fn status_poll_interval(&self) -> Duration {
        Duration::from_secs(self.status_poll_secs.max(1))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_secs.max(1))
    }
}

/// Where the config directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config-dir` or `NORDTRAY_CONFIG_DIR`.
    Flag,
    /// Platform config root.
    Default,
    /// Working directory fallback.
    Fallback,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "flag/env"),
            Self::Default => write!(f, "default"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Resolves the config directory without creating it.
pub fn resolve_config_dir(flag: Option<&Path>) -> (PathBuf, ConfigSource) {
    if let Some(dir) = flag {
        return (dir.to_path_buf(), ConfigSource::Flag);
    }

    match dirs::config_dir() {
        Some(root) => (root.join(constants::CONFIG_DIR_NAME), ConfigSource::Default),
        None => (
            PathBuf::from(constants::FALLBACK_CONFIG_DIR),
            ConfigSource::Fallback,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(AppConfig::load(dir.path()).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::CONFIG_FILE_NAME),
            "binary = \"/opt/nordvpn/bin/nordvpn\"\nstatus_poll_secs = 10\n",
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.binary, "/opt/nordvpn/bin/nordvpn");
        assert_eq!(config.status_poll_interval(), Duration::from_secs(10));
        assert_eq!(config.tick_rate_ms, constants::DEFAULT_TICK_RATE);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), "status_poll_secs = \"x\"").unwrap();
        assert!(matches!(AppConfig::load(dir.path()), Err(Error::Config { .. })));
    }

    #[test]
    fn test_intervals_clamped() {
        let config = AppConfig {
            status_poll_secs: 0,
            tick_rate_ms: 0,
            toast_secs: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.status_poll_interval(), Duration::from_secs(1));
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
        assert_eq!(config.toast_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_resolve_config_dir_flag_wins() {
        let (dir, source) = resolve_config_dir(Some(Path::new("/tmp/custom")));
        assert_eq!(dir, PathBuf::from("/tmp/custom"));
        assert_eq!(source, ConfigSource::Flag);
    }

    #[test]
    fn test_resolve_config_dir_default_name() {
        let (dir, source) = resolve_config_dir(None);
        assert_ne!(source, ConfigSource::Flag);
        assert!(dir.ends_with(constants::CONFIG_DIR_NAME) || dir.ends_with(constants::FALLBACK_CONFIG_DIR));
    }
}
