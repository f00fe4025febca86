//! Session editor state: the sets entered so far and the save rules.

use crate::app::session::{
    is_valid_weight, session_create, session_get, session_update, SessionCreateReq,
    SessionDetailDto, SessionUpdateReq,
};
use crate::domain::{Exercise, SetInput};
use crate::error::AppError;
use crate::infra::Database;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftSet {
    pub exercise_id: i64,
    pub exercise_name: String,
    pub reps: i32,
    pub weight: f64,
}

/// Stored session being edited. Absent for a new session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditTarget {
    pub session_id: i64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionDraft {
    pub description: String,
    editing: Option<EditTarget>,
    sets: Vec<DraftSet>,
}

impl SessionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from a stored session, in entry order.
    pub fn from_detail(detail: &SessionDetailDto) -> Self {
        let sets = detail
            .exercises
            .iter()
            .flat_map(|occurrence| {
                occurrence.sets.iter().map(move |s| DraftSet {
                    exercise_id: occurrence.exercise_id,
                    exercise_name: occurrence.exercise_name.clone(),
                    reps: s.reps,
                    weight: s.weight,
                })
            })
            .collect();
        Self {
            description: detail.description.clone(),
            editing: Some(EditTarget {
                session_id: detail.id,
                date: detail.date,
            }),
            sets,
        }
    }

    pub fn load(db: &Database, session_id: i64) -> Result<Self, AppError> {
        Ok(Self::from_detail(&session_get(db, session_id)?))
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Training Session"
        } else {
            "Add Training Session"
        }
    }

    pub fn editing(&self) -> Option<&EditTarget> {
        self.editing.as_ref()
    }

    pub fn sets(&self) -> &[DraftSet] {
        &self.sets
    }

    pub fn can_add_set(exercise: Option<&Exercise>, reps: i32, weight: f64) -> bool {
        exercise.is_some() && reps > 0 && is_valid_weight(weight)
    }

    pub fn add_set(
        &mut self,
        exercise: Option<&Exercise>,
        reps: i32,
        weight: f64,
    ) -> Result<(), AppError> {
        let exercise = exercise.ok_or_else(|| AppError::Validation("select an exercise".into()))?;
        if reps <= 0 {
            return Err(AppError::Validation("reps must be positive".into()));
        }
        if !is_valid_weight(weight) {
            return Err(AppError::Validation(
                "weight must be a non-negative number".into(),
            ));
        }
        self.sets.push(DraftSet {
            exercise_id: exercise.id,
            exercise_name: exercise.name.clone(),
            reps,
            weight,
        });
        Ok(())
    }

    pub fn remove_set(&mut self, index: usize) -> Option<DraftSet> {
        (index < self.sets.len()).then(|| self.sets.remove(index))
    }

    pub fn can_save(&self) -> bool {
        !self.sets.is_empty() && !self.description.trim().is_empty()
    }

    /// Store the draft: a new session, or a full replace of the edited one.
    pub fn save(self, db: &Database) -> Result<SessionDetailDto, AppError> {
        if !self.can_save() {
            return Err(AppError::Validation(
                "a description and at least one set are required".into(),
            ));
        }
        let sets: Vec<SetInput> = self
            .sets
            .iter()
            .map(|s| SetInput {
                exercise_id: s.exercise_id,
                reps: s.reps,
                weight: s.weight,
            })
            .collect();
        match self.editing {
            Some(target) => session_update(
                db,
                SessionUpdateReq {
                    id: target.session_id,
                    description: Some(self.description),
                    date: None,
                    sets,
                },
            ),
            None => session_create(
                db,
                SessionCreateReq {
                    description: self.description,
                    date: None,
                    sets,
                },
            ),
        }
    }
}
