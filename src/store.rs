//! The entry store: sole access point to the persisted entries table.
//!
//! An [`EntryStore`] is constructed explicitly and passed to whatever needs it.
//! It is `Send + Sync`, so it can be shared behind an `Arc` when more than one
//! thread needs it; the pooled database underneath serializes writes.

use crate::db::{entries, Database};
use crate::entry::Entry;
use crate::errors::AppResult;
use std::path::Path;
use tracing::{debug, info};

/// Store for journal entries backed by a SQLite database.
pub struct EntryStore {
    db: Database,
}

impl EntryStore {
    /// Wraps an already opened database.
    pub fn new(db: Database) -> Self {
        EntryStore { db }
    }

    /// Opens (creating if needed) the database file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a store failure if the file cannot be opened or initialized.
    pub fn open(path: &Path) -> AppResult<Self> {
        Ok(EntryStore::new(Database::open(path)?))
    }

    /// Opens a throwaway in-memory store.
    pub fn open_in_memory() -> AppResult<Self> {
        Ok(EntryStore::new(Database::open_in_memory()?))
    }

    /// Every entry, most recent first. Empty when nothing is stored.
    pub fn list_all(&self) -> AppResult<Vec<Entry>> {
        let conn = self.db.get_conn()?;
        entries::list_entries(&conn)
    }

    /// The entry with `id`, or `None` if there is no such row.
    pub fn get(&self, id: i64) -> AppResult<Option<Entry>> {
        let conn = self.db.get_conn()?;
        entries::get_entry(&conn, id)
    }

    /// Inserts `entry`, or replaces the row with the same id, returning the
    /// effective row id.
    ///
    /// The store does not check completeness; callers validate first with
    /// [`Entry::validate`].
    ///
    /// # Errors
    ///
    /// Returns a store failure if the write could not be performed.
    pub fn save(&self, entry: &Entry) -> AppResult<i64> {
        let conn = self.db.get_conn()?;
        let id = entries::upsert_entry(&conn, entry)?;
        info!("Saved entry {}", id);
        Ok(id)
    }

    /// Removes the entry with `id`, returning the number of rows removed.
    ///
    /// Deleting an id that does not exist reports 0.
    pub fn delete(&self, id: i64) -> AppResult<usize> {
        let conn = self.db.get_conn()?;
        let removed = entries::delete_entry(&conn, id)?;
        if removed == 0 {
            debug!("No entry {} to delete", id);
        } else {
            info!("Deleted entry {}", id);
        }
        Ok(removed)
    }

    /// Number of stored entries.
    pub fn count(&self) -> AppResult<usize> {
        let conn = self.db.get_conn()?;
        entries::count_entries(&conn)
    }
}
