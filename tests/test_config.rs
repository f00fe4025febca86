//! Configuration parsing tests

use exercise_tracker_lib::config::{default_db_path, AppConfig, DEFAULT_DB_FILE};
use std::path::{Path, PathBuf};

#[test]
fn parses_full_document() {
    let config = AppConfig::from_json_str(
        r#"{
            "databasePath": "/tmp/gym.db",
            "initialData": {
                "muscleGroups": ["Chest", "Back"],
                "exercises": [
                    { "name": "Row", "muscleGroups": ["Back"] },
                    { "name": "Fly", "description": "Cable fly", "muscleGroups": ["Chest"] }
                ]
            }
        }"#,
    )
    .unwrap();
    assert_eq!(config.database_path, Some(PathBuf::from("/tmp/gym.db")));
    let data = config.initial_data.unwrap();
    assert_eq!(data.muscle_groups, vec!["Chest", "Back"]);
    assert_eq!(data.exercises.len(), 2);
    assert!(data.exercises[0].description.is_none());
    assert_eq!(data.exercises[1].description.as_deref(), Some("Cable fly"));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = AppConfig::from_json_str("{}").unwrap();
    assert!(config.database_path.is_none());
    assert!(config.initial_data.is_none());

    let config = AppConfig::from_json_str(r#"{ "initialData": {} }"#).unwrap();
    let data = config.initial_data.unwrap();
    assert!(data.muscle_groups.is_empty());
    assert!(data.exercises.is_empty());
}

#[test]
fn malformed_document_is_a_config_error() {
    let err = AppConfig::from_json_str("{ not json").unwrap_err();
    assert_eq!(err.code(), "CONFIG_ERROR");
}

#[test]
fn explicit_missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(Some(dir.path().join("absent.json").as_path())).unwrap_err();
    assert_eq!(err.code(), "CONFIG_ERROR");
}

#[test]
fn load_reads_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "databasePath": "here.db" }"#).unwrap();
    let config = AppConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config.database_path, Some(PathBuf::from("here.db")));
}

#[test]
fn db_path_resolution_order() {
    let config = AppConfig {
        database_path: Some(PathBuf::from("configured.db")),
        initial_data: None,
    };
    assert_eq!(
        config.resolve_db_path(Some(Path::new("flag.db"))),
        PathBuf::from("flag.db")
    );
    assert_eq!(config.resolve_db_path(None), PathBuf::from("configured.db"));
    assert_eq!(AppConfig::default().resolve_db_path(None), default_db_path());
    assert!(default_db_path().ends_with(DEFAULT_DB_FILE));
}
