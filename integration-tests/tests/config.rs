use pretty_assertions::assert_eq;
use shoplog_core::api::Api;
use shoplog_core::conf::{ConfigError, EngineConfig, load_config, load_config_or_default};
use std::fs;
use tempfile::TempDir;

mod common;

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("shoplog.toml");
    fs::write(&path, body).unwrap();
    path
}

/// A shorter inactivity gap splits the fixture journeys further
#[test]
fn session_gap_from_config_file() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[sessions]\ninactivity_gap_secs = 60\n");
    let config = load_config(&path).unwrap();
    let (store, _) = common::load_access_log(&config);

    // Act
    let res = Api::new(&store, &config).journey("user_1002").unwrap();

    // Assert
    let lengths: Vec<usize> = res.sessions.iter().map(|s| s.path_sequence.len()).collect();
    assert_eq!(lengths, vec![1, 2, 1]);
    assert!(res.sessions.iter().all(|s| !s.completed_purchase));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();

    let config = load_config_or_default(&dir.path().join("nope.toml")).unwrap();

    assert_eq!(config, EngineConfig::default());
}

#[test]
fn invalid_values_are_all_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[ingest]\nbatch_size = 0\n\n[realtime]\ndefault_window_minutes = 0\n",
    );

    let err = load_config(&path).unwrap_err();

    match err {
        ConfigError::Validation { issues } => assert_eq!(issues.len(), 2),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[summary]\ntop_path = 3\n");

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}
