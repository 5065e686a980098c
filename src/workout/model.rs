use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Kind of workout session
///
/// Uses lowercase naming to match the serialized form.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutType {
    /// Resistance training
    strength,
    /// Endurance work (running, cycling, ...)
    cardio,
    /// Stretching and mobility
    flexibility,
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strength" => Ok(WorkoutType::strength),
            "cardio" => Ok(WorkoutType::cardio),
            "flexibility" => Ok(WorkoutType::flexibility),
            _ => Err(format!(
                "Invalid workout type '{}'. Valid options are: strength, cardio, flexibility",
                s
            )),
        }
    }
}

/// A single exercise within a workout
///
/// Exercises are owned exclusively by their workout; the id only needs to
/// be unique within that workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Identifier unique within the owning workout (e.g., "ex-2")
    pub id: String,
    /// Exercise name as displayed (e.g., "Bench press")
    pub name: String,
    /// Number of sets performed
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Weight used, in pounds; zero for bodyweight exercises
    pub weight: f64,
}

/// A logged workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier across the workout log (e.g., "workout-4")
    pub id: String,
    /// Date the workout was logged; assigned at creation
    pub date: NaiveDate,
    /// Session length in minutes
    pub duration: u32,
    /// Kind of session
    pub workout_type: WorkoutType,
    /// Exercises performed, order preserved as entered
    pub exercises: Vec<Exercise>,
}

/// Caller-supplied exercise payload, lacking the store-assigned id
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDraft {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
}

/// Caller-supplied workout payload, lacking id and date
#[derive(Debug, Clone)]
pub struct WorkoutDraft {
    pub duration: u32,
    pub workout_type: WorkoutType,
    pub exercises: Vec<ExerciseDraft>,
}

/// Materialize exercise drafts, assigning within-workout ids
pub(crate) fn assign_exercise_ids(drafts: Vec<ExerciseDraft>) -> Vec<Exercise> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(i, draft)| Exercise {
            id: format!("ex-{}", i + 1),
            name: draft.name,
            sets: draft.sets,
            reps: draft.reps,
            weight: draft.weight,
        })
        .collect()
}
