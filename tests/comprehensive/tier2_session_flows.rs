//! End-to-end session flows through the facade, the way an embedding
//! view layer would drive them.

use chrono::Utc;
use satchel::{
    ContactBook, ContactsExport, EditorHistory, TaskKind, TaskScheduler, Timestamp,
    VisitorTracker, VisitorsExport,
};

use crate::test_utils::init_tracing;

#[test]
fn scheduler_flow_add_process_render() {
    init_tracing();
    let mut scheduler = TaskScheduler::new();

    scheduler.add("send newsletter", TaskKind::Email).unwrap();
    scheduler.add("upload report", TaskKind::Upload).unwrap();
    scheduler.add("ping ops channel", TaskKind::Message).unwrap();

    // What the stats panel reads after every mutation
    assert_eq!(scheduler.len(), 3);
    assert_eq!(scheduler.next().unwrap().name, "send newsletter");
    assert_eq!(scheduler.last().unwrap().name, "ping ops channel");

    // Queue rendering is a head-first snapshot
    let names: Vec<String> = scheduler.queued().into_iter().map(|t| t.name).collect();
    assert_eq!(
        names,
        vec!["send newsletter", "upload report", "ping ops channel"]
    );

    let done = scheduler.process_next().unwrap();
    assert_eq!(done.name, "send newsletter");
    assert_eq!(done.kind.label(), "email");
    assert!(done.processed_at.is_some());

    // Processing log shows the newest first
    assert_eq!(scheduler.processed()[0].name, "send newsletter");
    assert_eq!(scheduler.len(), 2);

    // Draining past empty is a quiet no-op
    scheduler.process_next().unwrap();
    scheduler.process_next().unwrap();
    assert!(scheduler.process_next().is_none());
}

#[test]
fn editor_flow_undo_redo_branching() {
    init_tracing();
    let mut editor = EditorHistory::new();

    editor.record("draft one");
    editor.record("draft one, revised");
    assert_eq!(editor.undo_depth(), 2);

    // Undo walks back; the live content lands on the redo stack
    let restored = editor.undo("draft one, revised").unwrap();
    assert_eq!(restored, "draft one");
    assert!(editor.can_redo());

    // Recording a fresh change discards the branched future
    editor.record("draft two");
    assert!(!editor.can_redo());
    assert_eq!(editor.redo("draft two"), None);

    // History depths drive the button states
    assert_eq!(editor.undo_depth(), 2);
    assert_eq!(editor.redo_depth(), 0);
}

#[test]
fn tracker_flow_duplicates_and_export() {
    init_tracing();
    let mut tracker = VisitorTracker::new();

    assert!(tracker.record("alice@example.com").unwrap());
    assert!(tracker.record("192.168.0.7").unwrap());
    assert!(!tracker.record("alice@example.com").unwrap());
    assert!(tracker.record("guest-17").unwrap());

    assert_eq!(tracker.unique_count(), 3);
    assert_eq!(tracker.duplicates_prevented(), 1);

    // The "today" stat takes an explicit cutoff from the view layer
    let an_hour_ago = Timestamp::from_datetime(Utc::now() - chrono::Duration::hours(1));
    assert_eq!(tracker.recorded_since(an_hour_ago), 3);

    let export = VisitorsExport::from_tracker(&tracker, Timestamp::now());
    assert_eq!(export.total_visitors, 3);
    assert_eq!(export.duplicates_prevented, 1);
    assert_eq!(
        export.visitors,
        vec!["192.168.0.7", "alice@example.com", "guest-17"]
    );

    let json: serde_json::Value =
        serde_json::from_str(&export.to_pretty_json().unwrap()).unwrap();
    assert_eq!(json["total_visitors"], 3);
    assert_eq!(json["duplicates_prevented"], 1);
    assert!(export.suggested_filename().starts_with("visitors_export_"));
    assert!(export.suggested_filename().ends_with(".json"));
}

#[test]
fn contacts_flow_crud_search_export() {
    init_tracing();
    let mut book = ContactBook::new();

    book.add("bob", "555-1111").unwrap();
    book.add("alice", "555-2222").unwrap();

    // Duplicate add is surfaced, not merged into an overwrite
    let err = book.add("bob", "555-2222").unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(book.get("bob").unwrap().value, "555-1111");

    // Edit goes through the sanctioned update path
    book.update_phone("bob", "555-2222").unwrap();
    assert_eq!(book.get("bob").unwrap().value, "555-2222");

    // Search drives the filtered list rendering
    let hits = book.search("555");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].0, "alice");

    let export = ContactsExport::from_book(&book, Timestamp::now());
    let json: serde_json::Value =
        serde_json::from_str(&export.to_pretty_json().unwrap()).unwrap();
    assert_eq!(json["total_contacts"], 2);
    assert_eq!(json["contacts"]["bob"]["phone"], "555-2222");
    assert!(json["contacts"]["bob"]["added_at"].is_string());

    book.remove("bob").unwrap();
    assert!(book.get("bob").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn clearing_every_container_resets_to_empty_signals() {
    init_tracing();

    let mut scheduler = TaskScheduler::new();
    scheduler.add("t", TaskKind::Other).unwrap();
    scheduler.clear();
    assert!(scheduler.process_next().is_none());
    assert!(scheduler.next().is_none());

    let mut editor = EditorHistory::new();
    editor.record("x");
    editor.clear();
    assert!(editor.undo("anything").is_none());
    assert!(editor.redo("anything").is_none());

    let mut tracker = VisitorTracker::new();
    tracker.record("u1").unwrap();
    tracker.clear();
    assert_eq!(tracker.unique_count(), 0);

    let mut book = ContactBook::new();
    book.add("bob", "555").unwrap();
    book.clear();
    assert!(book.get("bob").is_none());
}
