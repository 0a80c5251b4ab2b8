use std::fs;
use std::path::PathBuf;

use satboard::error::{ConfigError, Error};
use satboard::infrastructure::config::settings::Config;
use tempfile::TempDir;

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_every_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
[server]
bind = "0.0.0.0:8080"
static_dir = "/srv/satboard/static"

[database]
path = "/var/lib/satboard/scores.db"
pool_size = 8
busy_timeout_ms = 1000

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.bind_addr().unwrap().port(), 8080);
    assert_eq!(config.server.static_dir, PathBuf::from("/srv/satboard/static"));
    assert_eq!(config.database.pool_size, 8);
    assert_eq!(config.database.busy_timeout_ms, 1000);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn config_rejects_zero_pool_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[database]\npool_size = 0\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "pool_size",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid pool size error, got {err}"),
        Ok(config) => panic!(
            "Expected zero pool size to be rejected, got {}",
            config.database.pool_size
        ),
    }
}

#[test]
fn config_reports_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.server.static_dir, PathBuf::from("static"));
    assert_eq!(config.database.pool_size, 5);
}

#[test]
fn malformed_file_is_not_replaced_by_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[database\npath = 1\n");
    let result = Config::load_or_default(&path);
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}
