//! Grouping of entered sets into per-exercise occurrences.

use super::models::SetInput;

/// Sets of one exercise, in the order they were entered.
#[derive(Debug, PartialEq)]
pub struct ExerciseGroup<'a> {
    pub exercise_id: i64,
    pub sets: Vec<&'a SetInput>,
}

impl<'a> ExerciseGroup<'a> {
    /// `(set_number, set)` pairs, numbered from 1.
    pub fn numbered(&self) -> impl Iterator<Item = (i32, &'a SetInput)> + '_ {
        (1..).zip(self.sets.iter().copied())
    }
}

/// Group sets by exercise. Groups appear in order of each exercise's first
/// set; within a group the entry order is kept.
pub fn group_sets_by_exercise(sets: &[SetInput]) -> Vec<ExerciseGroup<'_>> {
    let mut groups: Vec<ExerciseGroup<'_>> = Vec::new();
    for set in sets {
        match groups.iter_mut().find(|g| g.exercise_id == set.exercise_id) {
            Some(group) => group.sets.push(set),
            None => groups.push(ExerciseGroup {
                exercise_id: set.exercise_id,
                sets: vec![set],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(exercise_id: i64, reps: i32, weight: f64) -> SetInput {
        SetInput {
            exercise_id,
            reps,
            weight,
        }
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group_sets_by_exercise(&[]).is_empty());
    }

    #[test]
    fn groups_follow_first_appearance() {
        let sets = vec![set(2, 5, 10.0), set(1, 8, 0.0), set(2, 5, 12.0)];
        let groups = group_sets_by_exercise(&sets);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].exercise_id, 2);
        assert_eq!(groups[1].exercise_id, 1);
        let weights: Vec<f64> = groups[0].sets.iter().map(|s| s.weight).collect();
        assert_eq!(weights, vec![10.0, 12.0]);
    }

    #[test]
    fn numbering_starts_at_one_per_group() {
        let sets = vec![set(1, 5, 10.0), set(1, 5, 12.0), set(3, 8, 0.0)];
        let groups = group_sets_by_exercise(&sets);
        let first: Vec<i32> = groups[0].numbered().map(|(n, _)| n).collect();
        let second: Vec<i32> = groups[1].numbered().map(|(n, _)| n).collect();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(second, vec![1]);
    }
}
