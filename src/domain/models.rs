//! Plain records mapped one-to-one from table rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub description: String,
}

/// A named movement in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleGroup {
    pub id: i64,
    pub name: String,
}

/// One occurrence of an exercise within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionExercise {
    pub id: i64,
    pub session_id: i64,
    pub exercise_id: i64,
}

/// One reps/weight entry; `set_number` starts at 1 within its occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    pub id: i64,
    pub session_exercise_id: i64,
    pub set_number: i32,
    pub reps: i32,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseMuscleGroup {
    pub exercise_id: i64,
    pub muscle_group_id: i64,
}

/// Catalog entry with the names of the groups it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseWithMuscleGroups {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub muscle_groups: Vec<String>,
}

/// A set as entered by the user, before it is numbered and stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetInput {
    pub exercise_id: i64,
    pub reps: i32,
    pub weight: f64,
}

/// A stored set joined with its exercise name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub session_exercise_id: i64,
    pub exercise_id: i64,
    pub exercise_name: String,
    pub set_number: i32,
    pub reps: i32,
    pub weight: f64,
}
