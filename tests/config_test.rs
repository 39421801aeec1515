//! Integration tests for Settings loading.
//!
//! These go through `Settings::load_file` where possible so a user's global
//! config or WASTELAND_* variables cannot leak into the assertions.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use wasteland::application::ApplicationError;
use wasteland::config::Settings;

#[test]
fn given_config_file_when_load_file_then_overrides_specified_fields() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wasteland.toml");
    fs::write(
        &path,
        r#"
input = "networks/day08.txt"
ghost_start = ".*Q$"
max_jumps = 5000
naive = false
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_file(&path).expect("load settings");

    // Assert
    assert_eq!(settings.input, PathBuf::from("networks/day08.txt"));
    assert_eq!(settings.ghost_start, ".*Q$");
    assert_eq!(settings.max_jumps, Some(5000));
    assert!(!settings.naive);
    // untouched fields keep their defaults
    assert_eq!(settings.start, "AAA");
    assert_eq!(settings.target, "^ZZZ$");
    assert_eq!(settings.progress_interval_ms, 1000);
    assert_eq!(settings.expected_jumps, None);
}

#[test]
fn given_input_with_env_var_when_load_file_then_path_is_expanded() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wasteland.toml");
    fs::write(&path, "input = \"$NETWORK_FIXTURE_ROOT/input.txt\"\n").unwrap();
    std::env::set_var("NETWORK_FIXTURE_ROOT", "/srv/puzzles");

    // Act
    let settings = Settings::load_file(&path).unwrap();

    // Assert
    assert_eq!(settings.input, PathBuf::from("/srv/puzzles/input.txt"));
}

#[test]
fn given_malformed_toml_when_load_file_then_config_error() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wasteland.toml");
    fs::write(&path, "max_jumps = \"many\"\n").unwrap();

    // Act
    let err = Settings::load_file(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_missing_explicit_config_when_load_then_config_error() {
    // Act
    let err = Settings::load(Some(Path::new("/nonexistent/wasteland.toml"))).unwrap_err();

    // Assert
    match err {
        ApplicationError::Config { message } => assert!(message.contains("not found")),
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[test]
fn given_defaults_when_rendering_then_toml_contains_every_field() {
    // Act
    let rendered = Settings::default().to_toml().unwrap();

    // Assert
    for key in [
        "input",
        "start",
        "target",
        "ghost_start",
        "ghost_target",
        "progress_interval_ms",
        "naive",
    ] {
        assert!(rendered.contains(key), "missing {key} in\n{rendered}");
    }
}
