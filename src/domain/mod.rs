//! Domain records and pure rules.

pub mod grouping;
pub mod models;

pub use grouping::{group_sets_by_exercise, ExerciseGroup};
pub use models::{
    Exercise, ExerciseMuscleGroup, ExerciseSet, ExerciseWithMuscleGroups, MuscleGroup, Session,
    SessionExercise, SetEntry, SetInput,
};
