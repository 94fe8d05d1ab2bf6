//! Tests for loading configuration files.

use std::io::Write;
use std::path::PathBuf;
use tictac::{GameConfig, Mark};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
[labels]
x = "Alice"
o = "Bob"

[log]
filter = "debug"
file = "game.log"
"#,
    );

    let config = GameConfig::load(Some(file.path())).expect("valid config");

    assert_eq!(config.labels().of(Mark::X), "Alice");
    assert_eq!(config.labels().of(Mark::O), "Bob");
    assert_eq!(config.log().filter(), "debug");
    assert_eq!(config.log().file(), &PathBuf::from("game.log"));
}

#[test]
fn test_partial_config_keeps_defaults() {
    let file = write_config("[log]\nfilter = \"warn\"\n");

    let config = GameConfig::from_file(file.path()).expect("valid config");

    assert_eq!(config.labels().of(Mark::X), "Player");
    assert_eq!(config.labels().of(Mark::O), "Computer");
    assert_eq!(config.log().filter(), "warn");
    assert_eq!(config.log().file(), &PathBuf::from("tictac.log"));
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    let err = GameConfig::load(Some(path.as_path())).unwrap_err();

    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_wrong_type_is_error() {
    let file = write_config("[labels]\nx = 7\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
