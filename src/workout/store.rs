use super::model::{Workout, WorkoutDraft, assign_exercise_ids, local_date_today};
use crate::id::counter_from_ids;
use crate::subscribe::{SubscriberId, Subscribers};
use serde::{Deserialize, Serialize};

/// State container for the workout log
///
/// Vec primary storage, most-recent-first, same trade-offs as the recipe
/// catalog. Aggregate statistics are always derived from the live
/// collection and never cached.
pub struct WorkoutStore {
    workouts: Vec<Workout>,
    /// Counter for generating unique workout ids
    workout_counter: u32,
    subscribers: Subscribers,
}

/// Serializable snapshot of a `WorkoutStore`
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WorkoutSnapshot {
    pub workout_counter: u32,
    pub workouts: Vec<Workout>,
}

/// Aggregate statistics over the workout log
///
/// Recomputed from the live collection on every call to
/// [`WorkoutStore::stats`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutStats {
    /// Number of logged workouts
    pub total_workouts: usize,
    /// Sum of workout durations, in minutes
    pub total_duration: u32,
    /// Sum of exercise counts across all workouts
    pub total_exercises: usize,
}

impl Default for WorkoutStore {
    fn default() -> Self {
        Self {
            workouts: Vec::new(),
            workout_counter: 0,
            subscribers: Subscribers::new(),
        }
    }
}

impl WorkoutStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with an injected initial collection
    ///
    /// The id counter is derived from the highest numeric id already in the
    /// collection.
    pub fn with_workouts(workouts: Vec<Workout>) -> Self {
        let workout_counter = counter_from_ids(workouts.iter().map(|w| w.id.as_str()), "workout-");
        Self {
            workouts,
            workout_counter,
            subscribers: Subscribers::new(),
        }
    }

    /// Rebuild a store from a snapshot
    pub fn from_snapshot(snapshot: WorkoutSnapshot) -> Self {
        Self {
            workouts: snapshot.workouts,
            workout_counter: snapshot.workout_counter,
            subscribers: Subscribers::new(),
        }
    }

    /// Take a serializable snapshot of the current state
    pub fn snapshot(&self) -> WorkoutSnapshot {
        WorkoutSnapshot {
            workout_counter: self.workout_counter,
            workouts: self.workouts.clone(),
        }
    }

    /// Generate a new unique workout id
    fn generate_workout_id(&mut self) -> String {
        self.workout_counter += 1;
        format!("workout-{}", self.workout_counter)
    }

    /// Log a workout from a draft
    ///
    /// Assigns a fresh workout id and within-workout exercise ids, stamps
    /// today's date, and prepends the workout so the log stays
    /// most-recent-first.
    ///
    /// # Returns
    /// The id assigned to the new workout
    pub fn add_workout(&mut self, draft: WorkoutDraft) -> String {
        let id = self.generate_workout_id();
        let workout = Workout {
            id: id.clone(),
            date: local_date_today(),
            duration: draft.duration,
            workout_type: draft.workout_type,
            exercises: assign_exercise_ids(draft.exercises),
        };
        self.workouts.insert(0, workout);
        self.subscribers.notify();
        id
    }

    /// Remove a workout by id
    ///
    /// # Returns
    /// True if a workout was removed; false (and no notification) if the id
    /// was not found
    pub fn remove_workout(&mut self, id: &str) -> bool {
        if let Some(pos) = self.workouts.iter().position(|w| w.id == id) {
            self.workouts.remove(pos);
            self.subscribers.notify();
            true
        } else {
            false
        }
    }

    /// The full workout log, most-recent-first
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Find a workout by id
    pub fn get(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Number of logged workouts
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Compute aggregate statistics from the live collection
    pub fn stats(&self) -> WorkoutStats {
        WorkoutStats {
            total_workouts: self.workouts.len(),
            total_duration: self.workouts.iter().map(|w| w.duration).sum(),
            total_exercises: self.workouts.iter().map(|w| w.exercises.len()).sum(),
        }
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> SubscriberId {
        self.subscribers.subscribe(listener)
    }

    /// Remove a change listener
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
