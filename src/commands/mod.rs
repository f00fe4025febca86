//! Command handlers (DTO boundary) and the CLI that drives them.

pub mod exercise;
pub mod muscle_group;
pub mod screen;
pub mod session;

use crate::app::{Screen, SessionDetailDto};
use crate::domain::{Exercise, ExerciseWithMuscleGroups, MuscleGroup, Session, SetEntry};
use crate::error::AppError;
use crate::infra::Database;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Exercise Tracker - workout sessions and exercise catalog", long_about = None)]
pub struct Cli {
    /// Database file; overrides the configured path.
    #[arg(long, global = true, env = "EXERCISE_TRACKER_DB")]
    pub db: Option<PathBuf>,

    /// Settings file; defaults to ./appsettings.json when present.
    #[arg(long, global = true, env = "EXERCISE_TRACKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record and review workout sessions
    #[command(subcommand)]
    Sessions(session::SessionCmd),
    /// Manage the exercise catalog
    #[command(subcommand)]
    Exercises(exercise::ExerciseCmd),
    /// Manage muscle groups
    #[command(subcommand)]
    MuscleGroups(muscle_group::MuscleGroupCmd),
    /// Print the data a screen would show
    Screen(screen::ScreenArgs),
}

/// Whatever a command returns, ready to print as JSON.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Sessions(Vec<Session>),
    SessionDetail(SessionDetailDto),
    Sets(Vec<SetEntry>),
    Exercises(Vec<Exercise>),
    Exercise(Exercise),
    ExercisesWithMuscleGroups(Vec<ExerciseWithMuscleGroups>),
    ExerciseWithMuscleGroups(ExerciseWithMuscleGroups),
    MuscleGroups(Vec<MuscleGroup>),
    MuscleGroup(MuscleGroup),
    Screen(Screen),
    Deleted { deleted: i64 },
}

pub fn dispatch(db: &Database, command: Command) -> Result<CommandOutput, AppError> {
    match command {
        Command::Sessions(cmd) => session::cmd_session(db, cmd),
        Command::Exercises(cmd) => exercise::cmd_exercise(db, cmd),
        Command::MuscleGroups(cmd) => muscle_group::cmd_muscle_group(db, cmd),
        Command::Screen(args) => screen::cmd_screen(db, args),
    }
}
