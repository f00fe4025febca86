//! Reference data seeding from the config document.

use crate::error::AppError;
use crate::infra::repo::exercise::{insert_exercise, insert_exercise_muscle_group, list_exercises};
use crate::infra::repo::muscle_group::{
    insert_muscle_group, list_muscle_groups, muscle_group_ids_by_name,
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialData {
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    #[serde(default)]
    pub exercises: Vec<SeedExercise>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedExercise {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub muscle_groups: usize,
    pub exercises: usize,
    pub links: usize,
}

/// Insert the muscle groups and exercises whose names are not stored yet.
/// Running it again with the same document inserts nothing.
pub fn seed_initial_data(conn: &mut Connection, data: &InitialData) -> Result<SeedReport, AppError> {
    let muscle_groups = seed_muscle_groups(conn, &data.muscle_groups)?;
    let (exercises, links) = seed_exercises(conn, &data.exercises)?;
    let report = SeedReport {
        muscle_groups,
        exercises,
        links,
    };
    log::info!(
        "seeded {} muscle groups, {} exercises, {} links",
        report.muscle_groups,
        report.exercises,
        report.links
    );
    Ok(report)
}

fn seed_muscle_groups(conn: &mut Connection, names: &[String]) -> Result<usize, AppError> {
    let mut known: HashSet<String> = list_muscle_groups(conn)?
        .into_iter()
        .map(|g| g.name)
        .collect();
    let to_add: Vec<&str> = names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty() && known.insert(n.to_string()))
        .collect();
    if to_add.is_empty() {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    for name in &to_add {
        insert_muscle_group(&tx, name)?;
    }
    tx.commit()?;
    Ok(to_add.len())
}

fn seed_exercises(conn: &mut Connection, exercises: &[SeedExercise]) -> Result<(usize, usize), AppError> {
    let mut known: HashSet<String> = list_exercises(conn)?.into_iter().map(|e| e.name).collect();
    let to_add: Vec<&SeedExercise> = exercises
        .iter()
        .filter(|e| !e.name.trim().is_empty() && known.insert(e.name.trim().to_string()))
        .collect();
    if to_add.is_empty() {
        return Ok((0, 0));
    }

    let tx = conn.transaction()?;
    let group_ids = muscle_group_ids_by_name(&tx)?;
    let mut links = 0usize;
    for seed in &to_add {
        let description = seed
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());
        let exercise_id = insert_exercise(&tx, seed.name.trim(), description)?;

        let mut linked = HashSet::new();
        for group_name in &seed.muscle_groups {
            match group_ids.get(group_name.trim()) {
                Some(&group_id) if linked.insert(group_id) => {
                    insert_exercise_muscle_group(&tx, exercise_id, group_id)?;
                    links += 1;
                }
                Some(_) => {}
                None => log::warn!(
                    "exercise '{}' references unknown muscle group '{}', link skipped",
                    seed.name,
                    group_name
                ),
            }
        }
    }
    tx.commit()?;
    Ok((to_add.len(), links))
}
