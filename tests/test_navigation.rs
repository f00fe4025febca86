//! Navigation + session editor integration tests

mod common;

use common::{add_exercise, add_muscle_group, init_test_db};
use exercise_tracker_lib::app::{
    exercise_list, session_get, session_list, Destination, Navigator, Screen, SessionDraft,
};

#[test]
fn navigator_starts_on_session_list() {
    let nav = Navigator::new();
    assert_eq!(nav.current(), Destination::SessionList);
}

#[test]
fn navigate_and_back() {
    let mut nav = Navigator::new();
    nav.navigate_to(Destination::ExerciseList);
    nav.navigate_to(Destination::AddExercise);
    assert_eq!(nav.current(), Destination::AddExercise);
    assert!(nav.back());
    assert_eq!(nav.current(), Destination::ExerciseList);
    assert!(nav.back());
    assert!(!nav.back());
    assert_eq!(nav.current(), Destination::SessionList);
}

#[test]
fn navigating_to_current_destination_does_not_grow_history() {
    let mut nav = Navigator::new();
    nav.navigate_to(Destination::SessionList);
    assert!(!nav.back());
}

#[test]
fn add_exercise_screen_lists_unselected_groups() {
    let db = init_test_db();
    add_muscle_group(&db, "Chest");
    add_muscle_group(&db, "Back");
    let mut nav = Navigator::new();
    nav.navigate_to(Destination::AddExercise);

    match nav.load(&db).unwrap() {
        Screen::AddExercise { muscle_groups } => {
            assert_eq!(muscle_groups.len(), 2);
            assert!(muscle_groups.iter().all(|g| !g.is_selected));
        }
        other => panic!("unexpected screen {:?}", other),
    }
}

#[test]
fn add_session_screen_offers_catalog() {
    let db = init_test_db();
    let chest = add_muscle_group(&db, "Chest");
    add_exercise(&db, "Bench Press", &[chest]);
    let mut nav = Navigator::new();
    nav.navigate_to(Destination::AddSession);

    match nav.load(&db).unwrap() {
        Screen::SessionEditor {
            title,
            draft,
            exercises,
        } => {
            assert_eq!(title, "Add Training Session");
            assert!(draft.sets().is_empty());
            assert_eq!(exercises.len(), 1);
        }
        other => panic!("unexpected screen {:?}", other),
    }
}

#[test]
fn draft_round_trip_create_then_edit() {
    let db = init_test_db();
    let chest = add_muscle_group(&db, "Chest");
    let back = add_muscle_group(&db, "Back");
    add_exercise(&db, "Bench Press", &[chest]);
    add_exercise(&db, "Row", &[back]);
    let catalog = exercise_list(&db).unwrap();

    let mut draft = SessionDraft::new();
    draft.description = "Upper body".into();
    draft.add_set(Some(&catalog[0]), 5, 60.0).unwrap();
    draft.add_set(Some(&catalog[1]), 10, 40.0).unwrap();
    draft.add_set(Some(&catalog[0]), 5, 62.5).unwrap();
    let saved = draft.save(&db).unwrap();

    let mut nav = Navigator::new();
    nav.navigate_to(Destination::EditSession {
        session_id: saved.id,
    });
    let mut editing = match nav.load(&db).unwrap() {
        Screen::SessionEditor { title, draft, .. } => {
            assert_eq!(title, "Edit Training Session");
            draft
        }
        other => panic!("unexpected screen {:?}", other),
    };
    // stored order is by occurrence: both bench sets, then the row
    let weights: Vec<f64> = editing.sets().iter().map(|s| s.weight).collect();
    assert_eq!(weights, vec![60.0, 62.5, 40.0]);

    editing.remove_set(2).unwrap();
    editing.description = "Chest only".into();
    editing.save(&db).unwrap();

    assert_eq!(session_list(&db).unwrap().len(), 1);
    let detail = session_get(&db, saved.id).unwrap();
    assert_eq!(detail.description, "Chest only");
    assert_eq!(detail.date, saved.date);
    assert_eq!(detail.exercises.len(), 1);
    assert_eq!(detail.exercises[0].sets.len(), 2);
}

#[test]
fn edit_unknown_session_fails_to_load() {
    let db = init_test_db();
    let mut nav = Navigator::new();
    nav.navigate_to(Destination::EditSession { session_id: 9 });
    assert_eq!(nav.load(&db).unwrap_err().code(), "NOT_FOUND");
}

#[test]
fn session_list_screen_reflects_new_sessions() {
    let db = init_test_db();
    let nav = Navigator::new();
    match nav.load(&db).unwrap() {
        Screen::SessionList { sessions } => assert!(sessions.is_empty()),
        other => panic!("unexpected screen {:?}", other),
    }
}
