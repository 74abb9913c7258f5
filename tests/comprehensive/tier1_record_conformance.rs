//! Record store conformance: insert/update asymmetry, timestamps,
//! search, snapshots.

use satchel::RecordStore;

#[test]
fn insert_duplicate_fails_and_keeps_original() {
    let mut store = RecordStore::new();
    store.insert("bob", "555-1111".to_string()).unwrap();

    let err = store.insert("bob", "555-2222".to_string()).unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(store.get("bob").unwrap().value, "555-1111");

    store.update("bob", "555-2222".to_string()).unwrap();
    assert_eq!(store.get("bob").unwrap().value, "555-2222");
}

#[test]
fn update_preserves_creation_time() {
    let mut store = RecordStore::new();
    store.insert("bob", 1).unwrap();
    let created = store.get("bob").unwrap().created_at;

    store.update("bob", 2).unwrap();
    store.update("bob", 3).unwrap();

    let record = store.get("bob").unwrap();
    assert_eq!(record.value, 3);
    assert_eq!(record.created_at, created);
    assert!(record.updated_at >= created);
}

#[test]
fn missing_keys_surface_not_found() {
    let mut store: RecordStore<i32> = RecordStore::new();
    assert!(store.get("ghost").is_none());
    assert!(store.update("ghost", 1).unwrap_err().is_not_found());
    assert!(store.remove("ghost").unwrap_err().is_not_found());
}

#[test]
fn entries_snapshot_survives_mutation() {
    let mut store = RecordStore::new();
    store.insert("a", 1).unwrap();
    store.insert("b", 2).unwrap();

    let entries = store.entries();
    store.remove("a").unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(store.len(), 1);
}

#[test]
fn search_is_a_linear_filter() {
    let mut store = RecordStore::new();
    for (name, phone) in [("alice", "555-1111"), ("bob", "555-2222"), ("carol", "777")] {
        store.insert(name, phone.to_string()).unwrap();
    }

    let hits = store.search(|name, record| name.contains('o') && record.value.contains("555"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, "bob");
}

#[test]
fn clear_frees_all_keys() {
    let mut store = RecordStore::new();
    store.insert("a", 1).unwrap();
    store.clear();

    assert_eq!(store.len(), 0);
    assert!(store.get("a").is_none());
    store.insert("a", 2).unwrap();
}
