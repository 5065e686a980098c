//! Task board ordering and move_task tests

use lifedash::*;

fn draft(title: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        description: String::new(),
        priority: Priority::medium,
    }
}

/// The task id must appear in exactly one column's ordering
fn columns_containing(store: &TaskStore, id: &str) -> Vec<TaskStatus> {
    TaskStatus::ALL
        .iter()
        .copied()
        .filter(|status| store.column_order(*status).iter().any(|t| t == id))
        .collect()
}

#[test]
fn test_add_task_appends_to_todo() {
    let mut store = TaskStore::new();
    let first = store.add_task(draft("T1"));
    let second = store.add_task(draft("T2"));

    assert_eq!(store.column_order(TaskStatus::todo), [first.clone(), second]);
    assert_eq!(store.get(&first).unwrap().status, TaskStatus::todo);
    assert!(store.column_order(TaskStatus::in_progress).is_empty());
    assert!(store.column_order(TaskStatus::done).is_empty());
}

#[test]
fn test_move_task_across_columns() {
    // Board: todo=[T1,T2], done=[]
    let mut store = TaskStore::new();
    let t1 = store.add_task(draft("T1"));
    let t2 = store.add_task(draft("T2"));

    assert!(store.move_task(&t1, TaskStatus::done, 0));

    // todo=[T2], done=[T1]
    assert_eq!(store.column_order(TaskStatus::todo), [t2]);
    assert_eq!(store.column_order(TaskStatus::done), [t1.clone()]);
    assert_eq!(store.get(&t1).unwrap().status, TaskStatus::done);
}

#[test]
fn test_move_task_leaves_exactly_one_column_containing_the_id() {
    let mut store = TaskStore::new();
    let id = store.add_task(draft("T1"));
    store.add_task(draft("T2"));

    for (status, index) in [
        (TaskStatus::in_progress, 0),
        (TaskStatus::done, 5),
        (TaskStatus::todo, 1),
        (TaskStatus::todo, 0),
    ] {
        assert!(store.move_task(&id, status, index));
        assert_eq!(columns_containing(&store, &id), [status]);
    }
}

#[test]
fn test_move_task_clamps_target_index() {
    let mut store = TaskStore::new();
    let t1 = store.add_task(draft("T1"));
    let t2 = store.add_task(draft("T2"));

    // Index far past the end clamps to the list length
    assert!(store.move_task(&t1, TaskStatus::done, 42));
    assert_eq!(store.column_order(TaskStatus::done), [t1.clone()]);

    assert!(store.move_task(&t2, TaskStatus::done, 42));
    assert_eq!(store.column_order(TaskStatus::done), [t1, t2]);
}

#[test]
fn test_move_task_lands_at_min_of_index_and_new_length() {
    let mut store = TaskStore::new();
    let a = store.add_task(draft("A"));
    let b = store.add_task(draft("B"));
    let c = store.add_task(draft("C"));
    store.move_task(&a, TaskStatus::done, 0);
    store.move_task(&b, TaskStatus::done, 1);

    // done=[A,B]; dropping C at index 7 puts it at position min(7, 3-1)=2
    store.move_task(&c, TaskStatus::done, 7);
    let order = store.column_order(TaskStatus::done);
    assert_eq!(order.iter().position(|id| *id == c), Some(2));
}

#[test]
fn test_same_column_move_is_a_pure_reorder() {
    let mut store = TaskStore::new();
    let a = store.add_task(draft("A"));
    let b = store.add_task(draft("B"));
    let c = store.add_task(draft("C"));

    // todo=[A,B,C] -> move C to the front
    assert!(store.move_task(&c, TaskStatus::todo, 0));
    assert_eq!(store.column_order(TaskStatus::todo), [c.clone(), a.clone(), b.clone()]);

    // Move A to the end
    assert!(store.move_task(&a, TaskStatus::todo, 2));
    assert_eq!(store.column_order(TaskStatus::todo), [c, b, a]);

    assert_eq!(store.len(), 3);
}

#[test]
fn test_move_unknown_task_is_noop() {
    let mut store = TaskStore::new();
    let id = store.add_task(draft("T1"));

    assert!(!store.move_task("task-999", TaskStatus::done, 0));
    assert_eq!(store.column_order(TaskStatus::todo), [id]);
    assert!(store.column_order(TaskStatus::done).is_empty());
}

#[test]
fn test_remove_task_clears_column_entry() {
    let mut store = TaskStore::new();
    let t1 = store.add_task(draft("T1"));
    let t2 = store.add_task(draft("T2"));
    store.move_task(&t2, TaskStatus::in_progress, 0);

    assert!(store.remove_task(&t2));
    assert!(store.column_order(TaskStatus::in_progress).is_empty());
    assert_eq!(store.column_order(TaskStatus::todo), [t1]);
    assert_eq!(store.len(), 1);

    // Removing again (stale id, e.g. a double-click) is a silent no-op
    assert!(!store.remove_task(&t2));
}

#[test]
fn test_tasks_in_follows_column_order() {
    let mut store = TaskStore::new();
    let a = store.add_task(draft("A"));
    let b = store.add_task(draft("B"));
    store.move_task(&a, TaskStatus::todo, 1);

    let titles: Vec<&str> = store
        .tasks_in(TaskStatus::todo)
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, ["B", "A"]);
    assert_eq!(store.column_order(TaskStatus::todo), [b, a]);
}

#[test]
fn test_locate_reports_column_and_index() {
    let mut store = TaskStore::new();
    let a = store.add_task(draft("A"));
    let b = store.add_task(draft("B"));

    assert_eq!(store.locate(&a), Some((TaskStatus::todo, 0)));
    assert_eq!(store.locate(&b), Some((TaskStatus::todo, 1)));

    store.move_task(&a, TaskStatus::done, 0);
    assert_eq!(store.locate(&a), Some((TaskStatus::done, 0)));
    assert_eq!(store.locate(&b), Some((TaskStatus::todo, 0)));

    assert_eq!(store.locate("task-999"), None);
}

#[test]
fn test_subscribers_observe_fully_applied_moves() {
    use std::cell::Cell;
    use std::rc::Rc;

    let mut store = TaskStore::new();
    let id = store.add_task(draft("T1"));

    let count = Rc::new(Cell::new(0));
    let c = Rc::clone(&count);
    store.subscribe(move || c.set(c.get() + 1));

    store.move_task(&id, TaskStatus::done, 0);
    assert_eq!(count.get(), 1);

    // A failed move does not notify
    store.move_task("task-999", TaskStatus::done, 0);
    assert_eq!(count.get(), 1);
}
