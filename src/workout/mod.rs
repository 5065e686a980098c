//! Workout log domain
//!
//! - `model`: entity shapes (Workout, Exercise) and the workout type enum
//! - `store`: the `WorkoutStore` state container and derived statistics

mod model;
mod store;

pub use model::{Exercise, ExerciseDraft, Workout, WorkoutDraft, WorkoutType, local_date_today};
pub use store::{WorkoutSnapshot, WorkoutStats, WorkoutStore};
