//! Tests for config file loading

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_uses_defaults_without_warning() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from_path(&dir.path().join("absent.toml"));

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let file = write_config("[search]\ndebounce_ms = 300\n");
    let result = load_config_from_path(file.path());

    assert_eq!(result.config.search.debounce_ms, 300);
    assert!(result.warning.is_none());
}

#[test]
fn test_invalid_file_falls_back_with_warning() {
    let file = write_config("[search\ndebounce_ms = ");
    let result = load_config_from_path(file.path());

    assert_eq!(result.config, Config::default());
    let warning = result.warning.expect("warning for broken config");
    assert!(warning.contains("Invalid config file"));
    assert!(warning.contains("using defaults"));
}

#[test]
fn test_default_path_ends_with_app_dir() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("ghsuggest/config.toml"));
    }
}
