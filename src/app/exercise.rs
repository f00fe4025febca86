//! Exercise catalog use cases.

use crate::domain::{Exercise, ExerciseWithMuscleGroups};
use crate::error::AppError;
use crate::infra::repo::exercise::{
    get_exercise, get_exercise_with_muscle_groups, insert_exercise, insert_exercise_muscle_group,
    list_exercises, list_exercises_with_muscle_groups, update_exercise,
};
use crate::infra::Database;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseCreateReq {
    pub name: String,
    pub description: Option<String>,
    pub muscle_group_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseUpdateReq {
    pub id: i64,
    pub name: Option<String>,
    /// `Some("")` clears the description.
    pub description: Option<String>,
}

fn clean_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

/// Add an exercise and link it to the selected muscle groups. At least one
/// group must be selected.
pub fn exercise_create(
    db: &Database,
    req: ExerciseCreateReq,
) -> Result<ExerciseWithMuscleGroups, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    let mut group_ids = req.muscle_group_ids;
    group_ids.sort_unstable();
    group_ids.dedup();
    if group_ids.is_empty() {
        return Err(AppError::Validation(
            "at least one muscle group is required".into(),
        ));
    }
    let description = clean_description(req.description);

    let mut conn = db.connect()?;
    let tx = conn.transaction()?;
    let id = insert_exercise(&tx, name, description.as_deref())?;
    for group_id in &group_ids {
        insert_exercise_muscle_group(&tx, id, *group_id)?;
    }
    let created = get_exercise_with_muscle_groups(&tx, id)?
        .ok_or_else(|| AppError::NotFound(format!("exercise {}", id)))?;
    tx.commit()?;

    log::debug!("created exercise {} '{}'", id, name);
    Ok(created)
}

pub fn exercise_get(db: &Database, id: i64) -> Result<ExerciseWithMuscleGroups, AppError> {
    let conn = db.connect()?;
    get_exercise_with_muscle_groups(&conn, id)?
        .ok_or_else(|| AppError::NotFound(format!("exercise {}", id)))
}

pub fn exercise_list(db: &Database) -> Result<Vec<Exercise>, AppError> {
    let conn = db.connect()?;
    list_exercises(&conn)
}

pub fn exercise_list_with_muscle_groups(
    db: &Database,
) -> Result<Vec<ExerciseWithMuscleGroups>, AppError> {
    let conn = db.connect()?;
    list_exercises_with_muscle_groups(&conn)
}

pub fn exercise_update(db: &Database, req: ExerciseUpdateReq) -> Result<Exercise, AppError> {
    let conn = db.connect()?;
    let current = get_exercise(&conn, req.id)?
        .ok_or_else(|| AppError::NotFound(format!("exercise {}", req.id)))?;

    let name = req
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or(current.name);
    let description = match req.description {
        Some(d) => clean_description(Some(d)),
        None => current.description,
    };

    let updated = Exercise {
        id: req.id,
        name,
        description,
    };
    update_exercise(&conn, &updated)?;
    Ok(updated)
}
