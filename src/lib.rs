//! Lifedash state core
//!
//! In-memory state containers for a personal dashboard made of three
//! independent mini-apps: a recipe catalog, a workout log, and a kanban
//! task board. The crate owns the application state and its mutation
//! operations; rendering and input capture belong to a presentation layer
//! that calls in and re-derives its views on every change notification.
//!
//! # Architecture
//!
//! - **Domain Layer**: `recipe`, `workout`, `board` modules - one state
//!   container per domain, each with its entity models and operations
//! - **Interaction Layer**: `board::DragEngine` - the start/over/end
//!   drag contract that commits reorders through the task store
//! - **Persistence Seam**: `storage` module - snapshot save/load for an
//!   external collaborator; the containers themselves never touch I/O
//!
//! All mutations run synchronously on a single logical thread inside a
//! UI-event callback; a container notifies its subscribers only after its
//! collections are fully updated, so derived views always see a consistent
//! post-mutation snapshot.
//!
//! # Example
//!
//! ```
//! use lifedash::board::{Priority, TaskDraft, TaskStatus, TaskStore};
//!
//! let mut board = TaskStore::new();
//! let id = board.add_task(TaskDraft {
//!     title: "Ship the release".to_string(),
//!     description: String::new(),
//!     priority: Priority::high,
//! });
//! board.move_task(&id, TaskStatus::in_progress, 0);
//! assert_eq!(board.tasks_in(TaskStatus::in_progress).len(), 1);
//! ```

mod id;

pub mod board;
pub mod recipe;
pub mod storage;
pub mod subscribe;
pub mod workout;

// Re-export commonly used types
pub use board::{BoardSnapshot, DragEngine, DropTarget, Priority, Task, TaskDraft, TaskStatus, TaskStore};
pub use recipe::{
    Category, Ingredient, IngredientDraft, Recipe, RecipeDraft, RecipeFilter, RecipePatch,
    RecipeSnapshot, RecipeStore, Unit, filter_recipes,
};
pub use storage::{AppSnapshot, SNAPSHOT_FORMAT_VERSION, Storage};
pub use subscribe::{SubscriberId, Subscribers};
pub use workout::{
    Exercise, ExerciseDraft, Workout, WorkoutDraft, WorkoutSnapshot, WorkoutStats, WorkoutStore,
    WorkoutType,
};
