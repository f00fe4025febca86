use crate::domain::MuscleGroup;
use crate::error::AppError;
use rusqlite::{params, Connection};
use std::collections::HashMap;

pub fn insert_muscle_group(conn: &Connection, name: &str) -> Result<i64, AppError> {
    conn.execute("INSERT INTO muscle_groups (name) VALUES (?1)", params![name])?;
    Ok(conn.last_insert_rowid())
}

pub fn list_muscle_groups(conn: &Connection) -> Result<Vec<MuscleGroup>, AppError> {
    let mut stmt = conn.prepare("SELECT id, name FROM muscle_groups ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok(MuscleGroup {
            id: r.get(0)?,
            name: r.get(1)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_muscle_group(conn: &Connection, group: &MuscleGroup) -> Result<usize, AppError> {
    let changed = conn.execute(
        "UPDATE muscle_groups SET name = ?1 WHERE id = ?2",
        params![group.name, group.id],
    )?;
    Ok(changed)
}

/// Fails with a constraint violation while an exercise is linked to the group.
pub fn delete_muscle_group(conn: &Connection, id: i64) -> Result<usize, AppError> {
    let changed = conn.execute("DELETE FROM muscle_groups WHERE id = ?1", [id])?;
    Ok(changed)
}

/// Name → id lookup. When a name occurs twice the lowest id wins.
pub fn muscle_group_ids_by_name(conn: &Connection) -> Result<HashMap<String, i64>, AppError> {
    let mut ids = HashMap::new();
    for group in list_muscle_groups(conn)? {
        ids.entry(group.name).or_insert(group.id);
    }
    Ok(ids)
}
