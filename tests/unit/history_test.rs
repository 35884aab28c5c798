//! Tests for the file-based history store

use liftcheck::adapters::history::FileHistoryStore;
use liftcheck::core::models::{ItemStatus, Reading, ReadingSnapshot, Verdict};
use liftcheck::core::ports::HistoryStore;
use liftcheck::core::services::run_inspection;
use tempfile::tempdir;

use crate::common::fixtures::sample_checklist;

fn safe_snapshot() -> ReadingSnapshot {
    let mut snapshot = ReadingSnapshot::empty();
    snapshot.insert("motor_temperature", Reading::numeric(60.0));
    snapshot.insert("door_sensor", Reading::boolean(true));
    snapshot.insert(
        "cables_visual",
        Reading::now(liftcheck::core::models::ReadingValue::Override(ItemStatus::Pass)),
    );
    snapshot
}

#[test]
fn append_then_list_round_trips() {
    let dir = tempdir().expect("tempdir");
    let store = FileHistoryStore::new(dir.path().to_path_buf());

    let checklist = sample_checklist();
    let report = run_inspection(&checklist, &safe_snapshot(), "EL-001");
    store.append(&report).expect("append");

    let entries = store.list("EL-001").expect("list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].elevator_id, "EL-001");
    assert_eq!(entries[0].verdict, Verdict::Safe);
    assert_eq!(entries[0].passed, 3);
    assert_eq!(entries[0].critical, 0);
}

#[test]
fn list_is_most_recent_first() {
    let dir = tempdir().expect("tempdir");
    let store = FileHistoryStore::new(dir.path().to_path_buf());

    let checklist = sample_checklist();
    let safe = run_inspection(&checklist, &safe_snapshot(), "EL-001");
    store.append(&safe).expect("append safe");

    let degraded = run_inspection(&checklist, &ReadingSnapshot::empty(), "EL-001");
    store.append(&degraded).expect("append degraded");

    let entries = store.list("EL-001").expect("list");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].verdict, Verdict::Caution);
    assert_eq!(entries[1].verdict, Verdict::Safe);
}

#[test]
fn history_is_keyed_by_elevator() {
    let dir = tempdir().expect("tempdir");
    let store = FileHistoryStore::new(dir.path().to_path_buf());

    let checklist = sample_checklist();
    store
        .append(&run_inspection(&checklist, &safe_snapshot(), "EL-001"))
        .expect("append");
    store
        .append(&run_inspection(&checklist, &safe_snapshot(), "EL-002"))
        .expect("append");

    assert_eq!(store.list("EL-001").expect("list").len(), 1);
    assert_eq!(store.list("EL-002").expect("list").len(), 1);
    assert!(store.list("EL-003").expect("list").is_empty());
}

#[test]
fn unknown_elevator_lists_empty_without_error() {
    let dir = tempdir().expect("tempdir");
    let store = FileHistoryStore::new(dir.path().to_path_buf());
    assert!(store.list("EL-404").expect("list").is_empty());
}
