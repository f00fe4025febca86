//! Screen routing. Each destination names the data its screen needs, and
//! `Navigator::load` assembles that projection from the database.

use crate::app::draft::SessionDraft;
use crate::app::exercise::{exercise_list, exercise_list_with_muscle_groups};
use crate::app::muscle_group::muscle_group_list;
use crate::app::session::session_list;
use crate::domain::{Exercise, ExerciseWithMuscleGroups, MuscleGroup, Session};
use crate::error::AppError;
use crate::infra::Database;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "destination", rename_all = "camelCase")]
pub enum Destination {
    SessionList,
    ExerciseList,
    AddExercise,
    AddSession,
    EditSession { session_id: i64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectableMuscleGroup {
    pub muscle_group: MuscleGroup,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Screen {
    SessionList {
        sessions: Vec<Session>,
    },
    ExerciseList {
        exercises: Vec<ExerciseWithMuscleGroups>,
    },
    AddExercise {
        muscle_groups: Vec<SelectableMuscleGroup>,
    },
    SessionEditor {
        title: &'static str,
        draft: SessionDraft,
        exercises: Vec<Exercise>,
    },
}

#[derive(Debug, Clone)]
pub struct Navigator {
    current: Destination,
    history: Vec<Destination>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Starts on the session list.
    pub fn new() -> Self {
        Self {
            current: Destination::SessionList,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Destination {
        self.current
    }

    pub fn navigate_to(&mut self, destination: Destination) {
        if destination != self.current {
            self.history.push(self.current);
            self.current = destination;
        }
    }

    /// Return to the previous destination. False when already at the start.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Load fresh data for the current destination.
    pub fn load(&self, db: &Database) -> Result<Screen, AppError> {
        load_screen(db, self.current)
    }
}

pub fn load_screen(db: &Database, destination: Destination) -> Result<Screen, AppError> {
    let screen = match destination {
        Destination::SessionList => Screen::SessionList {
            sessions: session_list(db)?,
        },
        Destination::ExerciseList => Screen::ExerciseList {
            exercises: exercise_list_with_muscle_groups(db)?,
        },
        Destination::AddExercise => Screen::AddExercise {
            muscle_groups: muscle_group_list(db)?
                .into_iter()
                .map(|muscle_group| SelectableMuscleGroup {
                    muscle_group,
                    is_selected: false,
                })
                .collect(),
        },
        Destination::AddSession => editor(db, SessionDraft::new())?,
        Destination::EditSession { session_id } => editor(db, SessionDraft::load(db, session_id)?)?,
    };
    Ok(screen)
}

fn editor(db: &Database, draft: SessionDraft) -> Result<Screen, AppError> {
    Ok(Screen::SessionEditor {
        title: draft.title(),
        exercises: exercise_list(db)?,
        draft,
    })
}
