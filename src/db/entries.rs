//! Entry CRUD operations.
//!
//! This module provides functions for listing, reading, upserting, and deleting
//! journal entries in the `entries` table, plus the mapping from a result row
//! back to an [`Entry`].

use crate::constants::TIMESTAMP_STORAGE_FORMAT;
use crate::entry::{Entry, Mood};
use crate::errors::{AppResult, DatabaseError};
use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

const SELECT_COLUMNS: &str = "SELECT _id, title, content, mood, entryDate FROM entries";

/// Renders a timestamp in the stored text form.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_STORAGE_FORMAT).to_string()
}

fn conversion_error(
    idx: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

/// Hydrates an [`Entry`] from a row selected with [`SELECT_COLUMNS`].
///
/// A NULL or empty mood becomes [`Mood::Unknown`]; a NULL timestamp becomes
/// the UNIX epoch. Unparsable text in either column is a conversion failure.
fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let mood = match row.get::<_, Option<String>>(3)? {
        Some(tag) => tag.parse::<Mood>().map_err(|e| conversion_error(3, e))?,
        None => Mood::Unknown,
    };

    let timestamp = match row.get::<_, Option<String>>(4)? {
        Some(text) => NaiveDateTime::parse_from_str(&text, TIMESTAMP_STORAGE_FORMAT)
            .map_err(|e| conversion_error(4, e))?,
        None => NaiveDateTime::default(),
    };

    Ok(Entry {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        content: row.get(2)?,
        mood,
        timestamp,
    })
}

/// Returns every entry, most recent first.
///
/// Ties on timestamp are broken by the newer row id. An empty table yields an
/// empty vector.
///
/// # Errors
///
/// Returns an error if the database operation fails or a row cannot be hydrated.
pub fn list_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    debug!("Listing all entries");

    let mut stmt = conn
        .prepare(&format!(
            "{} ORDER BY entryDate DESC, _id DESC",
            SELECT_COLUMNS
        ))
        .map_err(DatabaseError::Sqlite)?;

    let entries = stmt
        .query_map([], entry_from_row)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    debug!("Listed {} entries", entries.len());
    Ok(entries)
}

/// Retrieves an entry by id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no entry exists with the given id.
pub fn get_entry(conn: &Connection, id: i64) -> AppResult<Option<Entry>> {
    debug!("Getting entry {}", id);

    let entry = conn
        .query_row(
            &format!("{} WHERE _id = ?1", SELECT_COLUMNS),
            params![id],
            entry_from_row,
        )
        .optional()
        .map_err(DatabaseError::Sqlite)?;

    Ok(entry)
}

/// Inserts an entry, or replaces the row that shares its id.
///
/// Entries without an id get one assigned by SQLite. Completeness is not
/// checked here.
///
/// # Errors
///
/// Returns an error if the write is rejected.
pub fn upsert_entry(conn: &Connection, entry: &Entry) -> AppResult<i64> {
    debug!("Upserting entry {:?}", entry.id);

    conn.execute(
        r#"
        INSERT OR REPLACE INTO entries (_id, title, content, mood, entryDate)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            entry.id,
            entry.title,
            entry.content,
            entry.mood.as_str(),
            format_timestamp(&entry.timestamp),
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    let id = conn.last_insert_rowid();
    debug!("Entry upserted with id {}", id);
    Ok(id)
}

/// Deletes the entry with `id`, returning how many rows went away (0 or 1).
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<usize> {
    debug!("Deleting entry {}", id);

    let rows_affected = conn
        .execute("DELETE FROM entries WHERE _id = ?1", params![id])
        .map_err(DatabaseError::Sqlite)?;

    Ok(rows_affected)
}

/// Counts stored entries.
pub fn count_entries(conn: &Connection) -> AppResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
        .map_err(DatabaseError::Sqlite)?;
    Ok(count as usize)
}
