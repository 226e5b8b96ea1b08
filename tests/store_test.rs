/*
[INPUT]:  taskdesk TaskStore public API
[OUTPUT]: End-to-end checks of add/sort/complete/remove behavior
[POS]:    Integration test layer - store verification
[UPDATE]: When changing store operations or ordering guarantees
*/

use chrono::{NaiveDate, NaiveTime};

use taskdesk::{StoreError, TaskStore};

fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

/// Adding a task with an empty title fails and leaves the store untouched.
#[test]
fn test_empty_title_is_invalid_input() {
    let mut store = TaskStore::new();
    let err = store
        .add("", "something", date(1, 1, 2024), time(10, 0))
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidInput(_)));
    assert_eq!(store.len(), 0);
}

/// Tasks added out of order come back ascending by date+time.
#[test]
fn test_sorted_view_is_chronological() {
    let mut store = TaskStore::new();
    store
        .add("B", "", date(2, 1, 2024), time(9, 0))
        .expect("add B");
    store
        .add("A", "", date(1, 1, 2024), time(10, 0))
        .expect("add A");

    let titles: Vec<String> = store
        .list_sorted()
        .into_iter()
        .map(|task| task.title)
        .collect();
    assert_eq!(titles, vec!["A", "B"]);
}

/// Index-addressed mutations validate against storage size.
#[test]
fn test_out_of_range_mutations_fail() {
    let mut store = TaskStore::new();
    store
        .add("a", "", date(1, 1, 2024), time(8, 0))
        .expect("add a");
    store
        .add("b", "", date(2, 1, 2024), time(8, 0))
        .expect("add b");

    assert_eq!(
        store.complete(5),
        Err(StoreError::OutOfRange { index: 5, len: 2 })
    );
    assert!(store.remove(2).is_err());
    assert_eq!(store.len(), 2);
    assert!(store.tasks().iter().all(|task| !task.completed));
}

/// Completing one task leaves every other task pending.
#[test]
fn test_complete_is_isolated() {
    let mut store = TaskStore::new();
    for day in 1..=4 {
        store
            .add(format!("task-{day}"), "", date(day, 1, 2024), time(12, 0))
            .expect("add");
    }

    store.complete(2).expect("complete");

    let completed: Vec<String> = store
        .list_sorted()
        .into_iter()
        .filter(|task| task.completed)
        .map(|task| task.title)
        .collect();
    assert_eq!(completed, vec!["task-3"]);
}

/// Removal shrinks the store by one and the task vanishes from the view.
#[test]
fn test_remove_drops_task_from_sorted_view() {
    let mut store = TaskStore::new();
    store
        .add("keep", "", date(1, 1, 2024), time(8, 0))
        .expect("add keep");
    store
        .add("drop", "", date(2, 1, 2024), time(8, 0))
        .expect("add drop");

    let removed = store.remove(1).expect("remove");
    assert_eq!(removed.title, "drop");
    assert_eq!(store.len(), 1);
    assert!(
        store
            .list_sorted()
            .iter()
            .all(|task| task.title != "drop")
    );
}

/// N tasks with distinct keys produce a strictly non-decreasing sorted view.
#[test]
fn test_sorted_view_round_trip() {
    let mut store = TaskStore::new();
    let days = [17, 3, 28, 9, 21, 1, 14];
    for (i, day) in days.iter().enumerate() {
        store
            .add(
                format!("task-{i}"),
                "",
                date(*day, 6, 2024),
                time((i % 24) as u32, 0),
            )
            .expect("add");
    }

    let sorted = store.list_sorted();
    assert_eq!(sorted.len(), days.len());
    for pair in sorted.windows(2) {
        assert!(pair[0].scheduled_at() <= pair[1].scheduled_at());
    }
}
