//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use exercise_tracker_lib::app::{exercise_create, muscle_group_create, ExerciseCreateReq, MuscleGroupCreateReq};
use exercise_tracker_lib::infra::{init_db, Database};
use std::ops::Deref;
use tempfile::TempDir;

/// A migrated database in its own temp directory, removed on drop.
pub struct TestDb {
    db: Database,
    _dir: TempDir,
}

impl Deref for TestDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

pub fn init_test_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let db = init_db(&dir.path().join("test.db")).unwrap();
    TestDb { db, _dir: dir }
}

pub fn add_muscle_group(db: &Database, name: &str) -> i64 {
    muscle_group_create(
        db,
        MuscleGroupCreateReq {
            name: name.to_string(),
        },
    )
    .unwrap()
    .id
}

pub fn add_exercise(db: &Database, name: &str, muscle_group_ids: &[i64]) -> i64 {
    exercise_create(
        db,
        ExerciseCreateReq {
            name: name.to_string(),
            description: None,
            muscle_group_ids: muscle_group_ids.to_vec(),
        },
    )
    .unwrap()
    .id
}

/// Count rows in a table through a fresh connection.
pub fn count(db: &Database, table: &str) -> i64 {
    let conn = db.connect().unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
        .unwrap()
}

/// Names of the user tables, for schema checks.
pub fn table_names(db: &Database) -> Vec<String> {
    let conn = db.connect().unwrap();
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
        .unwrap();
    let names = stmt
        .query_map([], |r| r.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap();
    names
}
