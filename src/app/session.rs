//! Session use cases: record, list, show, edit, delete.

use crate::domain::{Session, SetEntry, SetInput};
use crate::error::AppError;
use crate::infra::repo::session::{
    delete_session, get_session, insert_session_with_sets, list_sessions, replace_session_sets,
    sets_for_session,
};
use crate::infra::Database;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreateReq {
    pub description: String,
    /// Defaults to now.
    pub date: Option<DateTime<Utc>>,
    pub sets: Vec<SetInput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdateReq {
    pub id: i64,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    /// Replaces every stored set of the session.
    pub sets: Vec<SetInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionDetailDto {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub description: String,
    pub exercises: Vec<SessionExerciseDto>,
}

/// One exercise occurrence with its numbered sets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionExerciseDto {
    pub session_exercise_id: i64,
    pub exercise_id: i64,
    pub exercise_name: String,
    pub sets: Vec<SetDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetDto {
    pub set_number: i32,
    pub reps: i32,
    pub weight: f64,
}

fn validate_description(description: &str) -> Result<String, AppError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(AppError::Validation("description is required".into()));
    }
    Ok(description.to_string())
}

pub(crate) fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

fn validate_sets(sets: &[SetInput]) -> Result<(), AppError> {
    if sets.is_empty() {
        return Err(AppError::Validation("at least one set is required".into()));
    }
    for (i, set) in sets.iter().enumerate() {
        if set.reps <= 0 {
            return Err(AppError::Validation(format!("set {}: reps must be positive", i + 1)));
        }
        if !is_valid_weight(set.weight) {
            return Err(AppError::Validation(format!(
                "set {}: weight must be a non-negative number",
                i + 1
            )));
        }
    }
    Ok(())
}

/// Fold joined set rows into one entry per exercise occurrence.
pub(crate) fn group_entries(entries: Vec<SetEntry>) -> Vec<SessionExerciseDto> {
    let mut out: Vec<SessionExerciseDto> = Vec::new();
    for e in entries {
        let set = SetDto {
            set_number: e.set_number,
            reps: e.reps,
            weight: e.weight,
        };
        match out.last_mut() {
            Some(last) if last.session_exercise_id == e.session_exercise_id => last.sets.push(set),
            _ => out.push(SessionExerciseDto {
                session_exercise_id: e.session_exercise_id,
                exercise_id: e.exercise_id,
                exercise_name: e.exercise_name,
                sets: vec![set],
            }),
        }
    }
    out
}

pub fn session_create(db: &Database, req: SessionCreateReq) -> Result<SessionDetailDto, AppError> {
    let description = validate_description(&req.description)?;
    validate_sets(&req.sets)?;
    let date = req.date.unwrap_or_else(Utc::now);

    let id = {
        let mut conn = db.connect()?;
        insert_session_with_sets(&mut conn, &date, &description, &req.sets)?
    };
    log::info!("recorded session {} with {} sets", id, req.sets.len());
    session_get(db, id)
}

pub fn session_list(db: &Database) -> Result<Vec<Session>, AppError> {
    let conn = db.connect()?;
    list_sessions(&conn)
}

pub fn session_get(db: &Database, id: i64) -> Result<SessionDetailDto, AppError> {
    let conn = db.connect()?;
    let session =
        get_session(&conn, id)?.ok_or_else(|| AppError::NotFound(format!("session {}", id)))?;
    let entries = sets_for_session(&conn, id)?;
    Ok(SessionDetailDto {
        id: session.id,
        date: session.date,
        description: session.description,
        exercises: group_entries(entries),
    })
}

/// Sets of a session joined with exercise names, in entry order.
pub fn session_sets(db: &Database, id: i64) -> Result<Vec<SetEntry>, AppError> {
    let conn = db.connect()?;
    sets_for_session(&conn, id)
}

/// Overwrite a session and replace all of its sets. Fields left `None`
/// keep their stored value.
pub fn session_update(db: &Database, req: SessionUpdateReq) -> Result<SessionDetailDto, AppError> {
    validate_sets(&req.sets)?;
    {
        let mut conn = db.connect()?;
        let current = get_session(&conn, req.id)?
            .ok_or_else(|| AppError::NotFound(format!("session {}", req.id)))?;
        let description = match req.description.as_deref() {
            Some(d) => validate_description(d)?,
            None => current.description,
        };
        let session = Session {
            id: current.id,
            date: req.date.unwrap_or(current.date),
            description,
        };
        replace_session_sets(&mut conn, &session, &req.sets)?;
    } // release conn before reading back
    log::info!("updated session {}", req.id);
    session_get(db, req.id)
}

pub fn session_delete(db: &Database, id: i64) -> Result<(), AppError> {
    let conn = db.connect()?;
    if delete_session(&conn, id)? == 0 {
        return Err(AppError::NotFound(format!("session {}", id)));
    }
    log::info!("deleted session {}", id);
    Ok(())
}
