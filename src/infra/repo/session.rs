use crate::domain::{group_sets_by_exercise, Session, SetEntry, SetInput};
use crate::error::AppError;
use crate::infra::repo::session_exercise::{insert_exercise_set, insert_session_exercise};
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

fn session_from_row(r: &Row<'_>) -> rusqlite::Result<Session> {
    let raw: String = r.get(1)?;
    let date = DateTime::parse_from_rfc3339(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);
    Ok(Session {
        id: r.get(0)?,
        date,
        description: r.get(2)?,
    })
}

pub fn insert_session(
    conn: &Connection,
    date: &DateTime<Utc>,
    description: &str,
) -> Result<i64, AppError> {
    conn.execute(
        "INSERT INTO sessions (date, description) VALUES (?1, ?2)",
        params![date.to_rfc3339(), description],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_sessions(conn: &Connection) -> Result<Vec<Session>, AppError> {
    let mut stmt = conn.prepare("SELECT id, date, description FROM sessions ORDER BY id")?;
    let rows = stmt.query_map([], session_from_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_session(conn: &Connection, id: i64) -> Result<Option<Session>, AppError> {
    let session = conn
        .query_row(
            "SELECT id, date, description FROM sessions WHERE id = ?1",
            [id],
            session_from_row,
        )
        .optional()?;
    Ok(session)
}

/// Overwrite date and description. Returns the number of rows changed.
pub fn update_session(conn: &Connection, session: &Session) -> Result<usize, AppError> {
    let changed = conn.execute(
        "UPDATE sessions SET date = ?1, description = ?2 WHERE id = ?3",
        params![session.date.to_rfc3339(), session.description, session.id],
    )?;
    Ok(changed)
}

/// Delete a session; its exercise and set rows go with it.
pub fn delete_session(conn: &Connection, id: i64) -> Result<usize, AppError> {
    let changed = conn.execute("DELETE FROM sessions WHERE id = ?1", [id])?;
    Ok(changed)
}

/// Insert one occurrence per exercise and one numbered row per set.
fn insert_grouped_sets(conn: &Connection, session_id: i64, sets: &[SetInput]) -> Result<(), AppError> {
    for group in group_sets_by_exercise(sets) {
        let session_exercise_id = insert_session_exercise(conn, session_id, group.exercise_id)?;
        for (set_number, set) in group.numbered() {
            insert_exercise_set(conn, session_exercise_id, set_number, set.reps, set.weight)?;
        }
    }
    Ok(())
}

/// Create a session together with its sets in one transaction.
pub fn insert_session_with_sets(
    conn: &mut Connection,
    date: &DateTime<Utc>,
    description: &str,
    sets: &[SetInput],
) -> Result<i64, AppError> {
    let tx = conn.transaction()?;
    let session_id = insert_session(&tx, date, description)?;
    insert_grouped_sets(&tx, session_id, sets)?;
    tx.commit()?;
    Ok(session_id)
}

/// Rewrite a session and all of its exercise/set rows atomically.
///
/// The stored fields are overwritten from `session`, every existing
/// occurrence is deleted, and `sets` are stored again grouped by exercise.
/// Nothing is changed if any statement fails.
pub fn replace_session_sets(
    conn: &mut Connection,
    session: &Session,
    sets: &[SetInput],
) -> Result<(), AppError> {
    let tx = conn.transaction()?;
    if update_session(&tx, session)? == 0 {
        return Err(AppError::NotFound(format!("session {}", session.id)));
    }
    tx.execute(
        "DELETE FROM session_exercises WHERE session_id = ?1",
        [session.id],
    )?;
    insert_grouped_sets(&tx, session.id, sets)?;
    tx.commit()?;
    log::debug!("replaced {} sets of session {}", sets.len(), session.id);
    Ok(())
}

/// Every set of a session with its exercise name, in entry order.
pub fn sets_for_session(conn: &Connection, session_id: i64) -> Result<Vec<SetEntry>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT se.id, e.id, e.name, es.set_number, es.reps, es.weight
         FROM exercise_sets es
         JOIN session_exercises se ON se.id = es.session_exercise_id
         JOIN exercises e ON e.id = se.exercise_id
         WHERE se.session_id = ?1
         ORDER BY se.id, es.set_number",
    )?;
    let rows = stmt.query_map([session_id], |r| {
        Ok(SetEntry {
            session_exercise_id: r.get(0)?,
            exercise_id: r.get(1)?,
            exercise_name: r.get(2)?,
            set_number: r.get(3)?,
            reps: r.get(4)?,
            weight: r.get(5)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
