use super::CommandOutput;
use crate::app::{muscle_group_create, muscle_group_list, MuscleGroupCreateReq};
use crate::error::AppError;
use crate::infra::Database;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum MuscleGroupCmd {
    /// List muscle groups
    List,
    /// Add a muscle group
    Add { name: String },
}

pub fn cmd_muscle_group(db: &Database, cmd: MuscleGroupCmd) -> Result<CommandOutput, AppError> {
    let out = match cmd {
        MuscleGroupCmd::List => CommandOutput::MuscleGroups(muscle_group_list(db)?),
        MuscleGroupCmd::Add { name } => {
            CommandOutput::MuscleGroup(muscle_group_create(db, MuscleGroupCreateReq { name })?)
        }
    };
    Ok(out)
}
