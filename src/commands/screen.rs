use super::CommandOutput;
use crate::app::{load_screen, Destination};
use crate::error::AppError;
use crate::infra::Database;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScreenName {
    SessionList,
    ExerciseList,
    AddExercise,
    AddSession,
    EditSession,
}

#[derive(Debug, Args)]
pub struct ScreenArgs {
    #[arg(value_enum)]
    pub name: ScreenName,
    /// Required for edit-session
    #[arg(long)]
    pub session_id: Option<i64>,
}

impl ScreenArgs {
    pub fn destination(&self) -> Result<Destination, AppError> {
        let destination = match self.name {
            ScreenName::SessionList => Destination::SessionList,
            ScreenName::ExerciseList => Destination::ExerciseList,
            ScreenName::AddExercise => Destination::AddExercise,
            ScreenName::AddSession => Destination::AddSession,
            ScreenName::EditSession => Destination::EditSession {
                session_id: self.session_id.ok_or_else(|| {
                    AppError::Validation("--session-id is required for edit-session".into())
                })?,
            },
        };
        Ok(destination)
    }
}

pub fn cmd_screen(db: &Database, args: ScreenArgs) -> Result<CommandOutput, AppError> {
    Ok(CommandOutput::Screen(load_screen(db, args.destination()?)?))
}
