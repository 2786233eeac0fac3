//! Integration tests for Settings layered loading.
//!
//! Precedence (lowest to highest): defaults, global file, explicit file, env.
//! Every layer is passed in explicitly, so the host's own config and
//! environment never leak into these tests.

use std::fs;
use std::path::{Path, PathBuf};

use config::{Environment, Map};
use tempfile::TempDir;

use trishaft::application::{ApplicationError, OutputFormat};
use trishaft::config::{Settings, ENV_PREFIX};

/// Environment source backed by a fixed map instead of the process environment.
fn env_vars(vars: &[(&str, &str)]) -> Environment {
    let map: Map<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Environment::with_prefix(ENV_PREFIX).source(Some(map))
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config file");
    path
}

fn load(global: Option<&Path>, file: Option<&Path>, env: &[(&str, &str)]) -> Settings {
    Settings::load_layers(global, file, env_vars(env)).expect("load settings")
}

// ============================================================
// Single layers
// ============================================================

#[test]
fn given_no_layers_when_loading_then_uses_defaults() {
    assert_eq!(load(None, None, &[]), Settings::default());
}

#[test]
fn given_missing_global_file_when_loading_then_skipped() {
    let dir = TempDir::new().unwrap();
    let absent = dir.path().join("trishaft.toml");

    assert_eq!(load(Some(&absent), None, &[]), Settings::default());
}

#[test]
fn given_global_file_when_loading_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let global = write_config(&dir, "global.toml", "format = \"json\"\ncolor = false\n");

    let settings = load(Some(&global), None, &[]);

    assert_eq!(settings.format, OutputFormat::Json);
    assert!(!settings.color);
}

#[test]
fn given_config_file_with_format_when_loading_then_overrides_only_format() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "trishaft.toml", "format = \"json\"\n");

    let settings = load(None, Some(&path), &[]);

    assert_eq!(settings.format, OutputFormat::Json);
    assert!(settings.color, "unspecified color should keep its default");
}

#[test]
fn given_config_file_with_color_off_when_loading_then_disables_color() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "trishaft.toml", "color = false\n");

    let settings = load(None, Some(&path), &[]);

    assert!(!settings.color);
    assert_eq!(settings.format, OutputFormat::Text);
}

// ============================================================
// Precedence between layers
// ============================================================

#[test]
fn given_global_and_explicit_file_when_loading_then_explicit_wins_per_field() {
    let dir = TempDir::new().unwrap();
    let global = write_config(&dir, "global.toml", "format = \"json\"\ncolor = false\n");
    let file = write_config(&dir, "site.toml", "format = \"text\"\n");

    let settings = load(Some(&global), Some(&file), &[]);

    assert_eq!(settings.format, OutputFormat::Text, "explicit file wins");
    assert!(!settings.color, "global value kept where file is silent");
}

#[test]
fn given_env_var_and_explicit_file_when_loading_then_env_wins() {
    let dir = TempDir::new().unwrap();
    let file = write_config(&dir, "site.toml", "format = \"text\"\ncolor = true\n");

    let settings = load(None, Some(&file), &[("TRISHAFT_FORMAT", "json")]);

    assert_eq!(settings.format, OutputFormat::Json);
    assert!(settings.color);
}

#[test]
fn given_all_layers_when_loading_then_each_field_from_highest_layer() {
    let dir = TempDir::new().unwrap();
    let global = write_config(&dir, "global.toml", "format = \"json\"\ncolor = true\n");
    let file = write_config(&dir, "site.toml", "color = false\n");

    let settings = load(Some(&global), Some(&file), &[("TRISHAFT_COLOR", "true")]);

    assert_eq!(settings.format, OutputFormat::Json, "from global");
    assert!(settings.color, "env overrides explicit file");
}

// ============================================================
// Failures
// ============================================================

#[test]
fn given_missing_config_file_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Settings::load_layers(None, Some(&path), env_vars(&[])).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn given_invalid_format_in_file_when_loading_then_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "trishaft.toml", "format = \"yaml\"\n");

    let err = Settings::load_layers(None, Some(&path), env_vars(&[])).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("parse"));
}

#[test]
fn given_invalid_global_file_when_loading_then_parse_error() {
    let dir = TempDir::new().unwrap();
    let global = write_config(&dir, "global.toml", "color = \"sometimes\"\n");

    let err = Settings::load_layers(Some(&global), None, env_vars(&[])).unwrap_err();

    assert!(err.to_string().contains("global.toml"));
}
