use crate::domain::{ExerciseSet, SessionExercise};
use crate::error::AppError;
use rusqlite::{params, Connection};

pub fn insert_session_exercise(
    conn: &Connection,
    session_id: i64,
    exercise_id: i64,
) -> Result<i64, AppError> {
    conn.execute(
        "INSERT INTO session_exercises (session_id, exercise_id) VALUES (?1, ?2)",
        params![session_id, exercise_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_session_exercises(
    conn: &Connection,
    session_id: i64,
) -> Result<Vec<SessionExercise>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT id, session_id, exercise_id FROM session_exercises WHERE session_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map([session_id], |r| {
        Ok(SessionExercise {
            id: r.get(0)?,
            session_id: r.get(1)?,
            exercise_id: r.get(2)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_session_exercise(
    conn: &Connection,
    occurrence: &SessionExercise,
) -> Result<usize, AppError> {
    let changed = conn.execute(
        "UPDATE session_exercises SET session_id = ?1, exercise_id = ?2 WHERE id = ?3",
        params![occurrence.session_id, occurrence.exercise_id, occurrence.id],
    )?;
    Ok(changed)
}

/// Removes the occurrence and, through the cascade, its sets.
pub fn delete_session_exercise(conn: &Connection, id: i64) -> Result<usize, AppError> {
    let changed = conn.execute("DELETE FROM session_exercises WHERE id = ?1", [id])?;
    Ok(changed)
}

pub fn insert_exercise_set(
    conn: &Connection,
    session_exercise_id: i64,
    set_number: i32,
    reps: i32,
    weight: f64,
) -> Result<i64, AppError> {
    conn.execute(
        "INSERT INTO exercise_sets (session_exercise_id, set_number, reps, weight) VALUES (?1, ?2, ?3, ?4)",
        params![session_exercise_id, set_number, reps, weight],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_exercise_sets(
    conn: &Connection,
    session_exercise_id: i64,
) -> Result<Vec<ExerciseSet>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT id, session_exercise_id, set_number, reps, weight FROM exercise_sets WHERE session_exercise_id = ?1 ORDER BY set_number",
    )?;
    let rows = stmt.query_map([session_exercise_id], |r| {
        Ok(ExerciseSet {
            id: r.get(0)?,
            session_exercise_id: r.get(1)?,
            set_number: r.get(2)?,
            reps: r.get(3)?,
            weight: r.get(4)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_exercise_set(conn: &Connection, set: &ExerciseSet) -> Result<usize, AppError> {
    let changed = conn.execute(
        "UPDATE exercise_sets SET session_exercise_id = ?1, set_number = ?2, reps = ?3, weight = ?4 WHERE id = ?5",
        params![set.session_exercise_id, set.set_number, set.reps, set.weight, set.id],
    )?;
    Ok(changed)
}

pub fn delete_exercise_set(conn: &Connection, id: i64) -> Result<usize, AppError> {
    let changed = conn.execute("DELETE FROM exercise_sets WHERE id = ?1", [id])?;
    Ok(changed)
}
