//! Muscle group use cases.

use crate::domain::MuscleGroup;
use crate::error::AppError;
use crate::infra::repo::muscle_group::{insert_muscle_group, list_muscle_groups};
use crate::infra::Database;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleGroupCreateReq {
    pub name: String,
}

pub fn muscle_group_create(db: &Database, req: MuscleGroupCreateReq) -> Result<MuscleGroup, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    let conn = db.connect()?;
    let id = insert_muscle_group(&conn, name)?;
    log::debug!("created muscle group {} '{}'", id, name);
    Ok(MuscleGroup {
        id,
        name: name.to_string(),
    })
}

pub fn muscle_group_list(db: &Database) -> Result<Vec<MuscleGroup>, AppError> {
    let conn = db.connect()?;
    list_muscle_groups(&conn)
}
