//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.  It only holds
//! presentation settings: what gets scaffolded is fixed.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`TEZGEN_OUTPUT__FORMAT`, `TEZGEN_OUTPUT__NO_COLOR`)
//! 3. Config file (`--config FILE`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Prefix of the environment variables read by [`AppConfig::load`].
pub const ENV_PREFIX: &str = "TEZGEN";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// `config_file` is the path the user passed via `--config`.  That file
    /// must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::load_from(&path, config_file.is_some(), Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .add_source(File::from(path).required(required))
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let config: Self = settings
            .try_deserialize()
            .context("Configuration has an invalid shape")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if OutputFormat::from_config(&self.output.format).is_none() {
            bail!(
                "Unknown output.format '{}' (expected auto, human, plain or json)",
                self.output.format
            );
        }
        Ok(())
    }

    /// The configured output format, `Auto` when unset.
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_config(&self.output.format).unwrap_or_default()
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.tezgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "tezgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".tezgen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    fn env(pairs: &[(&str, &str)]) -> Environment {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&temp.path().join("none.toml"), false, no_env()).unwrap();
        assert_eq!(cfg.output.format, "auto");
        assert_eq!(cfg.output_format(), OutputFormat::Auto);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = AppConfig::load_from(&temp.path().join("none.toml"), true, no_env());
        assert!(result.is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[output]\nformat = \"plain\"\nno_color = true\n").unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output_format(), OutputFormat::Plain);
    }

    #[test]
    fn environment_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[output]\nformat = \"plain\"\n").unwrap();

        let cfg = AppConfig::load_from(
            &path,
            true,
            env(&[
                ("TEZGEN_OUTPUT__FORMAT", "json"),
                ("TEZGEN_OUTPUT__NO_COLOR", "true"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.output_format(), OutputFormat::Json);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[output]\nformat = \"fancy\"\n").unwrap();

        let err = AppConfig::load_from(&path, true, no_env()).unwrap_err();
        assert!(err.to_string().contains("fancy"));
    }

    #[test]
    fn config_path_is_named_config_toml() {
        let p = AppConfig::config_path();
        assert!(p.ends_with("config.toml") || p.ends_with(".tezgen.toml"));
    }

    #[test]
    fn defaults_serialize_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[output]"));
        assert!(text.contains("format = \"auto\""));
    }
}
