//! Integration tests for the entry store against an on-disk database.

use chrono::{NaiveDate, NaiveDateTime};
use moodlog::db::schema::SCHEMA_VERSION;
use moodlog::errors::{AppError, DatabaseError};
use moodlog::ops::{self, EntryChanges, NewEntry};
use moodlog::{Entry, EntryStore, MissingField, Mood};
use rusqlite::Connection;
use tempfile::TempDir;

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn open_store(dir: &TempDir) -> EntryStore {
    EntryStore::open(&dir.path().join("journal.db")).expect("open store")
}

#[test]
fn test_full_entry_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    // a fresh entry starts out incomplete
    let mut draft = Entry::blank();
    assert_eq!(draft.missing_field(), MissingField::Title);

    draft.title = "Trip".to_string();
    draft.content = "Went hiking".to_string();
    assert_eq!(draft.missing_field(), MissingField::Mood);

    draft.mood = Mood::Happy;
    draft = draft.with_timestamp(at(1, 10, 0));
    assert!(draft.is_complete());

    let id = store.save(&draft).unwrap();
    assert_eq!(id, 1);

    let fetched = store.get(id).unwrap().unwrap();
    assert_eq!(fetched, draft.clone().with_id(id));

    assert_eq!(store.delete(id).unwrap(), 1);
    assert!(store.get(id).unwrap().is_none());
}

#[test]
fn test_entries_survive_reopen() {
    let dir = TempDir::new().unwrap();

    let id = {
        let store = open_store(&dir);
        store
            .save(&Entry::new("Monday", "Rain all day", Mood::Sad).with_timestamp(at(2, 9, 30)))
            .unwrap()
    };

    let store = open_store(&dir);
    let entry = store.get(id).unwrap().unwrap();
    assert_eq!(entry.title, "Monday");
    assert_eq!(entry.timestamp, at(2, 9, 30));
}

#[test]
fn test_upsert_keeps_row_count() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    for i in 0..3 {
        store
            .save(&Entry::new(format!("e{}", i), "c", Mood::Bored).with_timestamp(at(1 + i, 0, 0)))
            .unwrap();
    }

    let mut second = store.get(2).unwrap().unwrap();
    second.title = "renamed".to_string();
    store.save(&second).unwrap();

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(
        all.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(),
        vec!["e2", "renamed", "e0"]
    );
}

#[test]
fn test_ops_flow() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    let created = ops::create_entry(
        &store,
        NewEntry {
            title: "Trip".to_string(),
            content: "Went hiking".to_string(),
            mood: Mood::Happy,
            timestamp: Some(at(1, 10, 0)),
        },
    )
    .unwrap();
    let id = created.id.unwrap();

    let edited = ops::edit_entry(
        &store,
        id,
        EntryChanges {
            mood: Some(Mood::Angry),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(edited.mood, Mood::Angry);
    assert!(edited.timestamp > created.timestamp);

    assert_eq!(ops::list_entries(&store).unwrap(), vec![edited.clone()]);
    assert_eq!(ops::show_entry(&store, id).unwrap(), edited);
    assert_eq!(ops::delete_entry(&store, id).unwrap(), 1);
    assert!(matches!(
        ops::show_entry(&store, id),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_older_schema_is_dropped_on_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.db");

    {
        let store = EntryStore::open(&path).unwrap();
        store.save(&Entry::new("old", "data", Mood::Sad)).unwrap();
    }

    // pretend the file was written by an earlier release
    {
        let conn = Connection::open(&path).unwrap();
        conn.pragma_update(None, "user_version", SCHEMA_VERSION - 1)
            .unwrap();
    }

    let store = EntryStore::open(&path).unwrap();
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_newer_schema_is_refused() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.db");

    {
        let store = EntryStore::open(&path).unwrap();
        store.save(&Entry::new("keep", "me", Mood::Happy)).unwrap();
    }
    {
        let conn = Connection::open(&path).unwrap();
        conn.pragma_update(None, "user_version", SCHEMA_VERSION + 1)
            .unwrap();
    }

    match EntryStore::open(&path) {
        Err(AppError::Database(DatabaseError::Downgrade { found, supported })) => {
            assert_eq!(found, SCHEMA_VERSION + 1);
            assert_eq!(supported, SCHEMA_VERSION);
        }
        Err(other) => panic!("Expected downgrade error, got {:?}", other),
        Ok(_) => panic!("Expected downgrade error, got a store"),
    }

    let conn = Connection::open(&path).unwrap();
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}
