//! Drag-and-drop reorder engine for the task board
//!
//! The engine abstracts a drag interaction as three events, independent of
//! any UI toolkit:
//! - `drag_start`: capture the task's source column and index
//! - `drag_over`: transient placeholder updates; never touches the store
//! - `drag_end`: commit through [`TaskStore::move_task`], or discard when
//!   the release happened outside any valid destination
//!
//! Only `drag_end` mutates store state, so a cancelled or stray drag leaves
//! the board exactly as it was.

use super::store::TaskStore;
use super::task::TaskStatus;

/// A candidate destination slot: a column and a 0-based insertion index
///
/// The index is the destination slot at drop time; `move_task` clamps it to
/// the column length, which also resolves the drop-between-items tie-break
/// (the displaced item shifts down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub status: TaskStatus,
    pub index: usize,
}

/// An in-flight drag interaction
#[derive(Debug, Clone)]
struct DragSession {
    task_id: String,
    source: DropTarget,
    over: Option<DropTarget>,
}

/// Drives drag interactions against a [`TaskStore`]
///
/// Holds at most one active session. The engine borrows the store per event
/// rather than owning it, so the presentation layer keeps a single store
/// shared between rendering and interaction.
#[derive(Debug, Default)]
pub struct DragEngine {
    active: Option<DragSession>,
}

impl DragEngine {
    /// Create an engine with no active session
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging a task
    ///
    /// Captures the task's current column and index as the source position.
    /// Starting a new drag replaces any session still in flight.
    ///
    /// # Returns
    /// True if the task exists on the board; false leaves the engine idle
    pub fn drag_start(&mut self, store: &TaskStore, task_id: &str) -> bool {
        let Some((status, index)) = store.locate(task_id) else {
            self.active = None;
            return false;
        };
        self.active = Some(DragSession {
            task_id: task_id.to_string(),
            source: DropTarget { status, index },
            over: None,
        });
        true
    }

    /// Record a transient "over" event
    ///
    /// Updates the visual placeholder only; `None` means the pointer left
    /// every valid destination. Ignored when no drag is active. The store
    /// is deliberately not involved.
    pub fn drag_over(&mut self, target: Option<DropTarget>) {
        if let Some(session) = self.active.as_mut() {
            session.over = target;
        }
    }

    /// The current placeholder slot, for rendering
    pub fn placeholder(&self) -> Option<DropTarget> {
        self.active.as_ref().and_then(|session| session.over)
    }

    /// The id of the task being dragged, if any
    pub fn dragging(&self) -> Option<&str> {
        self.active.as_ref().map(|session| session.task_id.as_str())
    }

    /// The source position captured at drag start, if a drag is active
    pub fn source(&self) -> Option<DropTarget> {
        self.active.as_ref().map(|session| session.source)
    }

    /// Finish the drag
    ///
    /// With a target, commits the move through [`TaskStore::move_task`];
    /// with `None` (released outside any valid destination) the session is
    /// discarded and the task stays at its source position. Either way the
    /// engine returns to idle.
    ///
    /// # Returns
    /// True if a move was committed
    pub fn drag_end(&mut self, store: &mut TaskStore, target: Option<DropTarget>) -> bool {
        let Some(session) = self.active.take() else {
            return false;
        };
        match target {
            Some(DropTarget { status, index }) => {
                store.move_task(&session.task_id, status, index)
            }
            None => false,
        }
    }

    /// Abandon the active drag without committing anything
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Whether a drag is currently in flight
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
