//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`HERALD_*`)
//! 3. Config file (TOML)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for sending.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Channel used when `--channel` is not given.  Unset means email.
    pub channel: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults { channel: None },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via
    /// `--config` (or `None` to use the default location).  An explicitly
    /// named file must exist; the default location may be absent, in which
    /// case defaults and environment variables are all there is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        let cfg = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(config::File::from(path).required(required))
            .add_source(config::Environment::with_prefix("HERALD").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(cfg)
    }

    /// Path to the active configuration file.
    ///
    /// A `.herald.toml` in the current directory wins over the per-user
    /// location from `directories::ProjectDirs`.
    pub fn config_path() -> PathBuf {
        let local = PathBuf::from(".herald.toml");
        if local.exists() {
            return local;
        }
        directories::ProjectDirs::from("com", "herald", "herald")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or(local)
    }

    /// Path used by `init --local`.
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(".herald.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_channel_is_unset() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.channel.is_none());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        // No config file in the test environment; env overrides are absent
        // under normal `cargo test` runs.
        let cfg = AppConfig::load(None).unwrap();
        assert!(cfg.defaults.channel.is_none());
    }

    #[test]
    fn load_with_missing_explicit_file_is_error() {
        let missing = PathBuf::from("/nonexistent/herald.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut cfg = AppConfig::default();
        cfg.defaults.channel = Some("sms".into());

        let serialised = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AppConfig = toml::from_str(&serialised).unwrap();
        assert_eq!(parsed.defaults.channel.as_deref(), Some("sms"));
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
