//! Drag engine contract tests: start/over/end against the task store

use lifedash::*;

fn board_with(titles: &[&str]) -> (TaskStore, Vec<String>) {
    let mut store = TaskStore::new();
    let ids = titles
        .iter()
        .map(|title| {
            store.add_task(TaskDraft {
                title: title.to_string(),
                description: String::new(),
                priority: Priority::low,
            })
        })
        .collect();
    (store, ids)
}

#[test]
fn test_drag_start_captures_source_position() {
    let (store, ids) = board_with(&["A", "B"]);
    let mut engine = DragEngine::new();

    assert!(engine.drag_start(&store, &ids[1]));
    assert!(engine.is_active());
    assert_eq!(engine.dragging(), Some(ids[1].as_str()));
    assert_eq!(
        engine.source(),
        Some(DropTarget {
            status: TaskStatus::todo,
            index: 1,
        })
    );
}

#[test]
fn test_drag_start_refuses_unknown_task() {
    let (store, _) = board_with(&["A"]);
    let mut engine = DragEngine::new();

    assert!(!engine.drag_start(&store, "task-999"));
    assert!(!engine.is_active());
}

#[test]
fn test_drag_over_updates_placeholder_without_touching_store() {
    let (store, ids) = board_with(&["A", "B"]);
    let mut engine = DragEngine::new();
    engine.drag_start(&store, &ids[0]);

    let over = DropTarget {
        status: TaskStatus::in_progress,
        index: 0,
    };
    engine.drag_over(Some(over));
    assert_eq!(engine.placeholder(), Some(over));

    // Transient events never move anything
    assert_eq!(store.column_order(TaskStatus::todo), [ids[0].clone(), ids[1].clone()]);
    assert!(store.column_order(TaskStatus::in_progress).is_empty());

    // Pointer leaving all valid destinations clears the placeholder
    engine.drag_over(None);
    assert_eq!(engine.placeholder(), None);
}

#[test]
fn test_drag_over_without_active_session_is_ignored() {
    let mut engine = DragEngine::new();
    engine.drag_over(Some(DropTarget {
        status: TaskStatus::done,
        index: 0,
    }));
    assert_eq!(engine.placeholder(), None);
}

#[test]
fn test_drag_end_commits_move() {
    let (mut store, ids) = board_with(&["A", "B"]);
    let mut engine = DragEngine::new();
    engine.drag_start(&store, &ids[0]);

    let committed = engine.drag_end(
        &mut store,
        Some(DropTarget {
            status: TaskStatus::done,
            index: 0,
        }),
    );

    assert!(committed);
    assert_eq!(store.column_order(TaskStatus::done), [ids[0].clone()]);
    assert_eq!(store.column_order(TaskStatus::todo), [ids[1].clone()]);
    assert!(!engine.is_active());
}

#[test]
fn test_drag_end_outside_any_destination_is_noop() {
    let (mut store, ids) = board_with(&["A", "B"]);
    let mut engine = DragEngine::new();
    engine.drag_start(&store, &ids[0]);
    engine.drag_over(Some(DropTarget {
        status: TaskStatus::done,
        index: 0,
    }));

    // Released outside every valid column: task stays at its source
    assert!(!engine.drag_end(&mut store, None));
    assert_eq!(store.column_order(TaskStatus::todo), [ids[0].clone(), ids[1].clone()]);
    assert!(store.column_order(TaskStatus::done).is_empty());
    assert!(!engine.is_active());
}

#[test]
fn test_drag_end_without_session_is_noop() {
    let (mut store, ids) = board_with(&["A"]);
    let mut engine = DragEngine::new();

    assert!(!engine.drag_end(
        &mut store,
        Some(DropTarget {
            status: TaskStatus::done,
            index: 0,
        }),
    ));
    assert_eq!(store.column_order(TaskStatus::todo), [ids[0].clone()]);
}

#[test]
fn test_cancel_discards_session() {
    let (mut store, ids) = board_with(&["A"]);
    let mut engine = DragEngine::new();
    engine.drag_start(&store, &ids[0]);
    engine.cancel();

    assert!(!engine.is_active());
    assert!(!engine.drag_end(
        &mut store,
        Some(DropTarget {
            status: TaskStatus::done,
            index: 0,
        }),
    ));
    assert_eq!(store.column_order(TaskStatus::todo), [ids[0].clone()]);
}

#[test]
fn test_same_column_drag_reorders() {
    let (mut store, ids) = board_with(&["A", "B", "C"]);
    let mut engine = DragEngine::new();

    // Drag C and drop it into the first slot of its own column
    engine.drag_start(&store, &ids[2]);
    engine.drag_over(Some(DropTarget {
        status: TaskStatus::todo,
        index: 0,
    }));
    assert!(engine.drag_end(
        &mut store,
        Some(DropTarget {
            status: TaskStatus::todo,
            index: 0,
        }),
    ));

    assert_eq!(
        store.column_order(TaskStatus::todo),
        [ids[2].clone(), ids[0].clone(), ids[1].clone()]
    );
}

#[test]
fn test_restarting_a_drag_replaces_the_session() {
    let (store, ids) = board_with(&["A", "B"]);
    let mut engine = DragEngine::new();

    engine.drag_start(&store, &ids[0]);
    engine.drag_over(Some(DropTarget {
        status: TaskStatus::done,
        index: 0,
    }));

    engine.drag_start(&store, &ids[1]);
    assert_eq!(engine.dragging(), Some(ids[1].as_str()));
    // Placeholder from the previous session is gone
    assert_eq!(engine.placeholder(), None);
}
