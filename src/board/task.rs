use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Task priority shown on the card
///
/// Uses lowercase naming to match the serialized form.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    low,
    medium,
    high,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::low),
            "medium" => Ok(Priority::medium),
            "high" => Ok(Priority::high),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high",
                s
            )),
        }
    }
}

/// Board column a task currently lives in
///
/// The column set is fixed and totally ordered for display;
/// `TaskStatus::ALL` gives that order. Uses lowercase naming to match the
/// serialized form.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not started
    todo,
    /// Currently being worked on
    in_progress,
    /// Finished
    done,
}

impl TaskStatus {
    /// All columns in display order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::todo, TaskStatus::in_progress, TaskStatus::done];

    /// Column header shown by the presentation layer
    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::todo => "To Do",
            TaskStatus::in_progress => "In Progress",
            TaskStatus::done => "Done",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::todo),
            "in_progress" => Ok(TaskStatus::in_progress),
            "done" => Ok(TaskStatus::done),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: todo, in_progress, done",
                s
            )),
        }
    }
}

/// A task card on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier across the board (e.g., "task-9")
    pub id: String,
    /// Task title
    pub title: String,
    /// Longer description shown on the card
    pub description: String,
    /// Priority badge
    pub priority: Priority,
    /// Column the task currently lives in
    pub status: TaskStatus,
}

/// Caller-supplied task payload, lacking id and status
///
/// New tasks always enter the board in the initial (todo) column.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}
