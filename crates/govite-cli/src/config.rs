//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` or the platform config location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub description: String,
    pub author: String,
    pub port: u16,
    pub backend_port: u16,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            description: "A Go + Vite desktop application".into(),
            author: String::new(),
            port: 5173,
            backend_port: 8080,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use the default location). An explicit `--config` path that does
    /// not exist is an error; an absent default file just means defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("config file not found: {}", path.display());
                }
                path.clone()
            }
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// `GOVITE_CONFIG_DIR` overrides the directory when set; otherwise
    /// `directories::ProjectDirs` picks the platform location, falling back
    /// to `.govite.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("GOVITE_CONFIG_DIR") {
            return PathBuf::from(dir).join("config.toml");
        }
        directories::ProjectDirs::from("com", "govite", "govite")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".govite.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ports() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.port, 5173);
        assert_eq!(cfg.defaults.backend_port, 8080);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let result = AppConfig::load(Some(&PathBuf::from("/nonexistent/govite.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nport = 3000\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.port, 3000);
        // Untouched fields keep their defaults.
        assert_eq!(cfg.defaults.backend_port, 8080);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "defaults = 12").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }
}
