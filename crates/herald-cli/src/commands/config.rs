//! `herald config` — read and write configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value:?}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let updated = set_config_value(config, &key, &value)?;
            persist(&updated)?;
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.channel" => Ok(config.defaults.channel.clone().unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

/// Apply one `key = value` update, validating the value where the key has a
/// closed domain.
fn set_config_value(mut config: AppConfig, key: &str, value: &str) -> CliResult<AppConfig> {
    match key {
        "defaults.channel" => {
            // Reject names no notifier exists for, instead of letting a
            // typo surface on the next `send`.
            let channel: herald_core::domain::Channel = value.parse()?;
            config.defaults.channel = Some(channel.name().to_string());
        }
        "output.no_color" => {
            config.output.no_color = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("output.no_color expects true or false, got '{value}'"),
                source: None,
            })?;
        }
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    }
    Ok(config)
}

/// Write the updated config back to the active file location.
fn persist(config: &AppConfig) -> CliResult<()> {
    let path = AppConfig::config_path();

    let toml = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
                message: format!("Failed to create config directory '{}'", parent.display()),
                source: e,
            })?;
        }
    }

    std::fs::write(&path, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", path.display()),
        source: e,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_key() {
        let mut cfg = AppConfig::default();
        cfg.defaults.channel = Some("sms".into());
        assert_eq!(get_config_value(&cfg, "defaults.channel").unwrap(), "sms");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn set_channel_accepts_registered_names() {
        let cfg = set_config_value(AppConfig::default(), "defaults.channel", "sms").unwrap();
        assert_eq!(cfg.defaults.channel.as_deref(), Some("sms"));
    }

    #[test]
    fn set_channel_rejects_unknown_names() {
        let result = set_config_value(AppConfig::default(), "defaults.channel", "pigeon");
        assert!(matches!(result, Err(CliError::UnknownChannel(_))));
    }

    #[test]
    fn set_no_color_parses_bool() {
        let cfg = set_config_value(AppConfig::default(), "output.no_color", "true").unwrap();
        assert!(cfg.output.no_color);

        let result = set_config_value(AppConfig::default(), "output.no_color", "maybe");
        assert!(matches!(result, Err(CliError::ConfigError { .. })));
    }

    #[test]
    fn set_unknown_key_is_error() {
        let result = set_config_value(AppConfig::default(), "does.not.exist", "x");
        assert!(matches!(result, Err(CliError::ConfigError { .. })));
    }
}
