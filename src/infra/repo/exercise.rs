use crate::domain::{Exercise, ExerciseMuscleGroup, ExerciseWithMuscleGroups};
use crate::error::AppError;
use rusqlite::{params, Connection, OptionalExtension};

const WITH_MUSCLE_GROUPS_SQL: &str = "SELECT e.id, e.name, e.description, m.name
     FROM exercises e
     LEFT JOIN exercise_muscle_groups emg ON emg.exercise_id = e.id
     LEFT JOIN muscle_groups m ON m.id = emg.muscle_group_id";

pub fn insert_exercise(
    conn: &Connection,
    name: &str,
    description: Option<&str>,
) -> Result<i64, AppError> {
    conn.execute(
        "INSERT INTO exercises (name, description) VALUES (?1, ?2)",
        params![name, description],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_exercise(conn: &Connection, id: i64) -> Result<Option<Exercise>, AppError> {
    let exercise = conn
        .query_row(
            "SELECT id, name, description FROM exercises WHERE id = ?1",
            [id],
            |r| {
                Ok(Exercise {
                    id: r.get(0)?,
                    name: r.get(1)?,
                    description: r.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(exercise)
}

pub fn list_exercises(conn: &Connection) -> Result<Vec<Exercise>, AppError> {
    let mut stmt = conn.prepare("SELECT id, name, description FROM exercises ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok(Exercise {
            id: r.get(0)?,
            name: r.get(1)?,
            description: r.get(2)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Overwrite name and description. Returns the number of rows changed.
pub fn update_exercise(conn: &Connection, exercise: &Exercise) -> Result<usize, AppError> {
    let changed = conn.execute(
        "UPDATE exercises SET name = ?1, description = ?2 WHERE id = ?3",
        params![exercise.name, exercise.description, exercise.id],
    )?;
    Ok(changed)
}

/// Fails with a constraint violation while a session or a muscle-group
/// link still references the exercise.
pub fn delete_exercise(conn: &Connection, id: i64) -> Result<usize, AppError> {
    let changed = conn.execute("DELETE FROM exercises WHERE id = ?1", [id])?;
    Ok(changed)
}

pub fn insert_exercise_muscle_group(
    conn: &Connection,
    exercise_id: i64,
    muscle_group_id: i64,
) -> Result<(), AppError> {
    conn.execute(
        "INSERT INTO exercise_muscle_groups (exercise_id, muscle_group_id) VALUES (?1, ?2)",
        params![exercise_id, muscle_group_id],
    )?;
    Ok(())
}

pub fn delete_exercise_muscle_group(
    conn: &Connection,
    exercise_id: i64,
    muscle_group_id: i64,
) -> Result<usize, AppError> {
    let changed = conn.execute(
        "DELETE FROM exercise_muscle_groups WHERE exercise_id = ?1 AND muscle_group_id = ?2",
        params![exercise_id, muscle_group_id],
    )?;
    Ok(changed)
}

pub fn list_exercise_muscle_groups(conn: &Connection) -> Result<Vec<ExerciseMuscleGroup>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT exercise_id, muscle_group_id FROM exercise_muscle_groups ORDER BY exercise_id, muscle_group_id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok(ExerciseMuscleGroup {
            exercise_id: r.get(0)?,
            muscle_group_id: r.get(1)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every exercise with the names of its muscle groups. Exercises without
/// links are included with an empty list.
pub fn list_exercises_with_muscle_groups(
    conn: &Connection,
) -> Result<Vec<ExerciseWithMuscleGroups>, AppError> {
    let sql = format!("{WITH_MUSCLE_GROUPS_SQL} ORDER BY e.id, m.name");
    let mut stmt = conn.prepare(&sql)?;
    let out = collect_with_muscle_groups(stmt.query([])?)?;
    Ok(out)
}

pub fn get_exercise_with_muscle_groups(
    conn: &Connection,
    id: i64,
) -> Result<Option<ExerciseWithMuscleGroups>, AppError> {
    let sql = format!("{WITH_MUSCLE_GROUPS_SQL} WHERE e.id = ?1 ORDER BY m.name");
    let mut stmt = conn.prepare(&sql)?;
    let mut out = collect_with_muscle_groups(stmt.query([id])?)?;
    Ok(out.pop())
}

// Rows arrive ordered by exercise id: one row per link, or a single row
// with a NULL group name when the exercise has none.
fn collect_with_muscle_groups(
    mut rows: rusqlite::Rows<'_>,
) -> Result<Vec<ExerciseWithMuscleGroups>, AppError> {
    let mut out: Vec<ExerciseWithMuscleGroups> = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let group: Option<String> = r.get(3)?;
        match out.last_mut() {
            Some(last) if last.id == id => last.muscle_groups.extend(group),
            _ => out.push(ExerciseWithMuscleGroups {
                id,
                name: r.get(1)?,
                description: r.get(2)?,
                muscle_groups: group.into_iter().collect(),
            }),
        }
    }
    Ok(out)
}
