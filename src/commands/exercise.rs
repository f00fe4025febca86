use super::CommandOutput;
use crate::app::{
    exercise_create, exercise_get, exercise_list, exercise_list_with_muscle_groups,
    exercise_update, ExerciseCreateReq, ExerciseUpdateReq,
};
use crate::error::AppError;
use crate::infra::Database;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum ExerciseCmd {
    /// List exercises with their muscle groups
    List {
        /// Omit the muscle group names
        #[arg(long)]
        plain: bool,
    },
    /// Show one exercise
    Show { id: i64 },
    /// Add an exercise linked to one or more muscle groups
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Muscle group id; repeat for several
        #[arg(long = "muscle-group", required = true)]
        muscle_group_ids: Vec<i64>,
    },
    /// Rename or re-describe an exercise
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        /// Pass an empty string to clear
        #[arg(long)]
        description: Option<String>,
    },
}

pub fn cmd_exercise(db: &Database, cmd: ExerciseCmd) -> Result<CommandOutput, AppError> {
    let out = match cmd {
        ExerciseCmd::List { plain: true } => CommandOutput::Exercises(exercise_list(db)?),
        ExerciseCmd::List { plain: false } => {
            CommandOutput::ExercisesWithMuscleGroups(exercise_list_with_muscle_groups(db)?)
        }
        ExerciseCmd::Show { id } => CommandOutput::ExerciseWithMuscleGroups(exercise_get(db, id)?),
        ExerciseCmd::Add {
            name,
            description,
            muscle_group_ids,
        } => CommandOutput::ExerciseWithMuscleGroups(exercise_create(
            db,
            ExerciseCreateReq {
                name,
                description,
                muscle_group_ids,
            },
        )?),
        ExerciseCmd::Update {
            id,
            name,
            description,
        } => CommandOutput::Exercise(exercise_update(
            db,
            ExerciseUpdateReq {
                id,
                name,
                description,
            },
        )?),
    };
    Ok(out)
}
