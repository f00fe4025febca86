//! Application use cases and transactions.

mod draft;
mod exercise;
mod muscle_group;
pub mod navigation;
mod session;

pub use draft::{DraftSet, EditTarget, SessionDraft};
pub use exercise::{
    exercise_create, exercise_get, exercise_list, exercise_list_with_muscle_groups,
    exercise_update, ExerciseCreateReq, ExerciseUpdateReq,
};
pub use muscle_group::{muscle_group_create, muscle_group_list, MuscleGroupCreateReq};
pub use navigation::{load_screen, Destination, Navigator, Screen, SelectableMuscleGroup};
pub use session::{
    session_create, session_delete, session_get, session_list, session_sets, session_update,
    SessionCreateReq, SessionDetailDto, SessionExerciseDto, SessionUpdateReq, SetDto,
};
