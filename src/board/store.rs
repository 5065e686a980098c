use super::task::{Task, TaskDraft, TaskStatus};
use crate::id::counter_from_ids;
use crate::subscribe::{SubscriberId, Subscribers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// State container for the kanban task board
///
/// Three structures are kept in sync by every mutating operation:
/// - `tasks`: Vec owns all task data in insertion order
/// - `task_map`: id → current column, for O(1) membership checks
/// - `order`: per-column id lists holding the display order; a column's
///   list is created lazily on first use, and readers treat an absent
///   list as empty
///
/// Mutations update all three before subscribers are notified, so a reader
/// never observes a task present in two columns or in none.
pub struct TaskStore {
    tasks: Vec<Task>,
    task_map: HashMap<String, TaskStatus>,
    order: HashMap<TaskStatus, Vec<String>>,
    /// Counter for generating unique task ids
    task_counter: u32,
    subscribers: Subscribers,
}

/// Serializable snapshot of a `TaskStore`
///
/// Tasks are grouped by column, each list in display order, so the
/// serialized form reads as the board does.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BoardSnapshot {
    pub task_counter: u32,
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            task_map: HashMap::new(),
            order: HashMap::new(),
            task_counter: 0,
            subscribers: Subscribers::new(),
        }
    }
}

impl TaskStore {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board with an injected initial task list
    ///
    /// Tasks are appended to their status column in the order supplied.
    /// The id counter is derived from the highest numeric id present.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut store = Self::new();
        store.task_counter = counter_from_ids(tasks.iter().map(|t| t.id.as_str()), "task-");
        for task in tasks {
            store.insert_task(task);
        }
        store
    }

    /// Rebuild a board from a snapshot
    ///
    /// Each task's status is forced to the column it was serialized under,
    /// so the column lists stay authoritative.
    pub fn from_snapshot(snapshot: BoardSnapshot) -> Self {
        let mut store = Self::new();
        store.task_counter = snapshot.task_counter;
        let columns = [
            (TaskStatus::todo, snapshot.todo),
            (TaskStatus::in_progress, snapshot.in_progress),
            (TaskStatus::done, snapshot.done),
        ];
        for (status, tasks) in columns {
            for mut task in tasks {
                task.status = status;
                store.insert_task(task);
            }
        }
        store
    }

    /// Take a serializable snapshot of the current state
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            task_counter: self.task_counter,
            todo: self.tasks_in(TaskStatus::todo).into_iter().cloned().collect(),
            in_progress: self
                .tasks_in(TaskStatus::in_progress)
                .into_iter()
                .cloned()
                .collect(),
            done: self.tasks_in(TaskStatus::done).into_iter().cloned().collect(),
        }
    }

    /// Append a task to all three structures (no notification)
    fn insert_task(&mut self, task: Task) {
        self.task_map.insert(task.id.clone(), task.status);
        self.order
            .entry(task.status)
            .or_default()
            .push(task.id.clone());
        self.tasks.push(task);
    }

    /// Generate a new unique task id
    fn generate_task_id(&mut self) -> String {
        self.task_counter += 1;
        format!("task-{}", self.task_counter)
    }

    /// Add a task from a draft
    ///
    /// Assigns a fresh id and appends the task to the end of the todo
    /// column's order.
    ///
    /// # Returns
    /// The id assigned to the new task
    pub fn add_task(&mut self, draft: TaskDraft) -> String {
        let id = self.generate_task_id();
        self.insert_task(Task {
            id: id.clone(),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            status: TaskStatus::todo,
        });
        self.subscribers.notify();
        id
    }

    /// Remove a task by id
    ///
    /// Deletes the task and its entry from whichever column order contained
    /// it.
    ///
    /// # Returns
    /// True if a task was removed; false (and no notification) if the id
    /// was not found
    pub fn remove_task(&mut self, id: &str) -> bool {
        let Some(status) = self.task_map.remove(id) else {
            return false;
        };
        if let Some(column) = self.order.get_mut(&status) {
            column.retain(|task_id| task_id != id);
        }
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(pos);
        }
        self.subscribers.notify();
        true
    }

    /// Move a task to a column position
    ///
    /// The reorder primitive committed by a drag release. Removes the id
    /// from its source column's order, rewrites the task's status, and
    /// inserts the id at `target_index` in the destination column's order,
    /// clamped to the list length. A same-column call is a pure reorder.
    ///
    /// All three structures are updated within this single call and
    /// subscribers are notified only afterwards, so no reader ever sees the
    /// task in two columns or in none.
    ///
    /// # Returns
    /// True if the task was found and moved; false (and no notification)
    /// otherwise
    pub fn move_task(&mut self, id: &str, target_status: TaskStatus, target_index: usize) -> bool {
        let Some(&source_status) = self.task_map.get(id) else {
            return false;
        };

        if let Some(column) = self.order.get_mut(&source_status) {
            column.retain(|task_id| task_id != id);
        }

        let destination = self.order.entry(target_status).or_default();
        let index = target_index.min(destination.len());
        destination.insert(index, id.to_string());

        self.task_map.insert(id.to_string(), target_status);
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.status = target_status;
        }

        self.subscribers.notify();
        true
    }

    /// Tasks in a column, in display order
    pub fn tasks_in(&self, status: TaskStatus) -> Vec<&Task> {
        self.order
            .get(&status)
            .map(|column| {
                column
                    .iter()
                    .filter_map(|id| self.tasks.iter().find(|t| t.id == *id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The id ordering of a column
    pub fn column_order(&self, status: TaskStatus) -> &[String] {
        self.order
            .get(&status)
            .map(|column| column.as_slice())
            .unwrap_or(&[])
    }

    /// Locate a task: its current column and position within it
    pub fn locate(&self, id: &str) -> Option<(TaskStatus, usize)> {
        let status = *self.task_map.get(id)?;
        let index = self
            .order
            .get(&status)?
            .iter()
            .position(|task_id| task_id == id)?;
        Some((status, index))
    }

    /// Find a task by id
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Total number of tasks on the board
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the board is empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
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
