//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/trishaft/trishaft.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `TRISHAFT_*` prefix

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, OutputFormat};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "TRISHAFT";

/// Unified configuration for trishaft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default output format for category listings
    pub format: OutputFormat,
    /// Colorize terminal output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

/// Get the XDG config directory for trishaft.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "trishaft").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("trishaft.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            format: overlay.format.unwrap_or(self.format),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(
            global_config_path().as_deref(),
            config_file,
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Load settings from explicit layer sources.
    ///
    /// # Arguments
    /// * `global_file` - Global config file; skipped when absent on disk
    /// * `config_file` - Explicit config file; it must exist
    /// * `env` - Source for `TRISHAFT_*` overrides
    pub fn load_layers(
        global_file: Option<&Path>,
        config_file: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global_file {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("load: explicit config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        Self::apply_env_overrides(current, env)
    }

    /// Apply `TRISHAFT_*` environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env.prefix_separator("_"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("format") {
            settings.format = OutputFormat::from_str(&val, true).map_err(|_| {
                ApplicationError::Config {
                    message: format!("invalid {ENV_PREFIX}_FORMAT: {val}"),
                }
            })?;
        }
        if let Ok(val) = config.get_string("color") {
            settings.color = val.parse().map_err(|_| ApplicationError::Config {
                message: format!("invalid {ENV_PREFIX}_COLOR: {val}"),
            })?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# trishaft configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/trishaft/trishaft.toml
#   File:   trishaft --config <FILE>  (or TRISHAFT_CONFIG)
#   Env:    TRISHAFT_FORMAT, TRISHAFT_COLOR

# Default output format for `categories list` and `categories show`: "text" or "json"
# format = "text"

# Colorize terminal output (NO_COLOR is honored as well)
# color = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
