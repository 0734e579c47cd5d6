//! Configuration resolution tests
//!
//! Default-location tests pass their own path to `load_with_default` so the
//! real user config directory is never read.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use recipe_common::config::{
    Config, ConfigOverrides, TomlConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS,
};
use recipe_common::Error;
use tempfile::{NamedTempFile, TempDir};

fn write_toml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults_when_nothing_configured() {
    let config = Config::resolve(ConfigOverrides::default(), TomlConfig::default());

    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert_eq!(
        config.search_url("").unwrap(),
        "https://www.themealdb.com/api/json/v1/1/search.php?s="
    );
}

#[test]
fn test_toml_values_apply() {
    let file = write_toml(
        r#"
        endpoint = "http://localhost:9000/search.php"
        timeout_secs = 7

        [logging]
        level = "debug"
        file = "/tmp/recipe-search.log"
        "#,
    );

    let config = Config::load(ConfigOverrides {
        config_path: Some(file.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(config.endpoint, "http://localhost:9000/search.php");
    assert_eq!(config.timeout, Duration::from_secs(7));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/recipe-search.log")));
    assert_eq!(config.source.as_deref(), Some(file.path()));
    assert!(config.warnings.is_empty());
}

#[test]
fn test_overrides_beat_toml() {
    let toml_config = TomlConfig {
        endpoint: Some("http://toml.test/search.php".to_string()),
        timeout_secs: Some(9),
        ..Default::default()
    };
    let overrides = ConfigOverrides {
        endpoint: Some("http://cli.test/search.php".to_string()),
        timeout_secs: Some(3),
        log_level: Some("warn".to_string()),
        ..Default::default()
    };

    let config = Config::resolve(overrides, toml_config);

    assert_eq!(config.endpoint, "http://cli.test/search.php");
    assert_eq!(config.timeout, Duration::from_secs(3));
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_explicit_missing_file_is_error() {
    let err = Config::load(ConfigOverrides {
        config_path: Some(PathBuf::from("/nonexistent/recipe-search/config.toml")),
        ..Default::default()
    })
    .unwrap_err();

    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_malformed_file_is_error() {
    let file = write_toml("endpoint = [not valid");

    let err = Config::load(ConfigOverrides {
        config_path: Some(file.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap_err();

    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_invalid_endpoint_is_rejected() {
    let file = write_toml("");

    let err = Config::load(ConfigOverrides {
        endpoint: Some("meals please".to_string()),
        config_path: Some(file.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap_err();

    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let file = write_toml("timeout_secs = 0");

    let err = Config::load(ConfigOverrides {
        config_path: Some(file.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap_err();

    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_malformed_default_file_reports_warning() {
    let file = write_toml("endpoint = [broken");

    let config = Config::load_with_default(ConfigOverrides::default(), Some(file.path())).unwrap();

    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert!(config.source.is_none());
    assert_eq!(config.warnings.len(), 1);
    assert!(config.warnings[0].contains("Failed to parse TOML"));
    assert!(config.warnings[0].ends_with("using defaults"));
}

#[test]
fn test_missing_default_file_reports_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipe-search").join("config.toml");

    let config = Config::load_with_default(ConfigOverrides::default(), Some(path.as_path())).unwrap();

    assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert_eq!(config.warnings.len(), 1);
    assert!(config.warnings[0].starts_with("No config file at"));
}

#[test]
fn test_default_file_values_apply_without_warnings() {
    let file = write_toml("timeout_secs = 12");

    let config = Config::load_with_default(ConfigOverrides::default(), Some(file.path())).unwrap();

    assert_eq!(config.timeout, Duration::from_secs(12));
    assert_eq!(config.source.as_deref(), Some(file.path()));
    assert!(config.warnings.is_empty());
}

#[test]
fn test_no_config_dir_reports_warning() {
    let config = Config::load_with_default(ConfigOverrides::default(), None).unwrap();

    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.warnings.len(), 1);
}

#[test]
fn test_explicit_path_ignores_default_location() {
    let explicit = write_toml("timeout_secs = 4");
    let broken_default = write_toml("endpoint = [broken");

    let config = Config::load_with_default(
        ConfigOverrides {
            config_path: Some(explicit.path().to_path_buf()),
            ..Default::default()
        },
        Some(broken_default.path()),
    )
    .unwrap();

    assert_eq!(config.timeout, Duration::from_secs(4));
    assert!(config.warnings.is_empty());
}
