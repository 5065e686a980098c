//! Kanban task board domain
//!
//! - `task`: entity shapes (Task) and the fixed priority/status enums
//! - `store`: the `TaskStore` state container with per-column ordering
//! - `drag`: the drag-and-drop reorder engine (start/over/end contract)

mod drag;
mod store;
mod task;

pub use drag::{DragEngine, DropTarget};
pub use store::{BoardSnapshot, TaskStore};
pub use task::{Priority, Task, TaskDraft, TaskStatus};
