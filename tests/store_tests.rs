use std::fs;
use std::path::Path;

mod common;
use common::{setup_test_store, ts_today};

use qtracker::models::entry::TimeEntry;
use qtracker::store::{EntryPatch, EntryStore};

fn sample_entry(id: i64) -> TimeEntry {
    TimeEntry::new(id, ts_today(8, 30, 0), common::today_display())
}

#[test]
fn test_open_missing_file_yields_empty_store() {
    let store_path = setup_test_store("store_open_missing");

    let store = EntryStore::open(&store_path).expect("open");
    assert!(store.is_empty());
    // opening alone must not create the file
    assert!(!Path::new(&store_path).exists());
}

#[test]
fn test_append_persists_and_rehydrates() {
    let store_path = setup_test_store("store_append_rehydrate");

    {
        let mut store = EntryStore::open(&store_path).expect("open");
        store.append(sample_entry(1)).expect("append");
        store.append(sample_entry(2)).expect("append");
    }

    let store = EntryStore::open(&store_path).expect("reopen");
    assert_eq!(store.len(), 2);
    // insertion order preserved
    assert_eq!(store.entries()[0].id, 1);
    assert_eq!(store.entries()[1].id, 2);
}

#[test]
fn test_update_sets_stamps() {
    let store_path = setup_test_store("store_update_stamps");

    let mut store = EntryStore::open(&store_path).expect("open");
    store.append(sample_entry(7)).expect("append");

    let start = ts_today(8, 31, 0);
    assert!(store.update(7, EntryPatch::start(start)).expect("update"));
    assert_eq!(store.get(7).unwrap().start, Some(start));

    let end = ts_today(8, 32, 0);
    assert!(store.update(7, EntryPatch::end(end)).expect("update"));

    let store = EntryStore::open(&store_path).expect("reopen");
    assert_eq!(store.get(7).unwrap().start, Some(start));
    assert_eq!(store.get(7).unwrap().end, Some(end));
}

#[test]
fn test_update_unknown_id_is_noop() {
    let store_path = setup_test_store("store_update_unknown");

    let mut store = EntryStore::open(&store_path).expect("open");
    store.append(sample_entry(1)).expect("append");

    let before = serde_json::to_string(store.entries()).unwrap();

    let touched = store
        .update(999, EntryPatch::start(ts_today(9, 0, 0)))
        .expect("update");
    assert!(!touched);

    // length and contents identical
    let after = serde_json::to_string(store.entries()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_remove_entry() {
    let store_path = setup_test_store("store_remove");

    let mut store = EntryStore::open(&store_path).expect("open");
    store.append(sample_entry(1)).expect("append");
    store.append(sample_entry(2)).expect("append");

    assert!(store.remove(1).expect("remove"));
    assert!(!store.remove(1).expect("remove again"));

    let store = EntryStore::open(&store_path).expect("reopen");
    assert_eq!(store.len(), 1);
    assert!(store.get(1).is_none());
}

#[test]
fn test_clear_removes_file_and_rehydrates_empty() {
    let store_path = setup_test_store("store_clear");

    let mut store = EntryStore::open(&store_path).expect("open");
    store.append(sample_entry(1)).expect("append");
    assert!(Path::new(&store_path).exists());

    store.clear().expect("clear");
    assert!(store.is_empty());
    assert!(!Path::new(&store_path).exists());

    let store = EntryStore::open(&store_path).expect("reopen");
    assert!(store.is_empty());
}

#[test]
fn test_malformed_store_file_is_an_error() {
    let store_path = setup_test_store("store_malformed");
    fs::write(&store_path, "this is not json").expect("write garbage");

    assert!(EntryStore::open(&store_path).is_err());
}
