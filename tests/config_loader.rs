use std::fs;

use fighterdex::config::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.api.base_url, "http://127.0.0.1:3000");
}

#[test]
fn partial_file_is_merged_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[api]
base_url = "https://catalog.example.com/v1"
timeout_seconds = 3

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://catalog.example.com/v1");
    assert_eq!(config.api.timeout_seconds, 3);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[api\nbase_url = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "{err:?}");
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn non_http_base_url_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[api]\nbase_url = \"ftp://catalog.example.com\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }), "{err:?}");
}

#[test]
fn zero_tick_rate_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
