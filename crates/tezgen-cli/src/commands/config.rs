//! `tezgen --config-*`: inspect and initialise configuration.

use std::path::Path;

use crate::{
    cli::ConfigAction,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config action.
pub fn execute(cmd: ConfigAction, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigAction::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigAction::List => {
            output.header("Current Configuration:")?;
            output.print(&to_toml(config)?)?;
        }

        ConfigAction::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }

        ConfigAction::Init { force } => {
            let path = AppConfig::config_path();
            if init_config(&path, force)? {
                output.success(&format!("Configuration created at {}", path.display()))?;
            } else {
                output.warning(&format!(
                    "Config already exists at {}  (use --force to overwrite)",
                    path.display(),
                ))?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Write the default configuration to `path`.  Returns `false` when a file
/// already exists and `force` is not set.
fn init_config(path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let text = to_toml(&AppConfig::default())?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create config directory '{}'", parent.display()))?;
    }
    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    Ok(true)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "auto");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
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
    fn init_writes_defaults_and_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/tezgen/config.toml");

        assert!(init_config(&path, false).unwrap());
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("format = \"auto\""));
    }

    #[test]
    fn init_respects_existing_file_unless_forced() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "# mine").unwrap();

        assert!(!init_config(&path, false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        assert!(init_config(&path, true).unwrap());
        assert!(fs::read_to_string(&path).unwrap().contains("[output]"));
    }
}
