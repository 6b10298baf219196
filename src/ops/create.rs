//! Write a new journal entry.

use crate::entry::{Entry, Mood};
use crate::errors::AppResult;
use crate::store::EntryStore;
use chrono::NaiveDateTime;
use tracing::{debug, info};

/// User input for a new entry.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    pub mood: Mood,
    /// Defaults to the current time when `None`.
    pub timestamp: Option<NaiveDateTime>,
}

/// Validates and stores a new entry, returning it with its assigned id.
///
/// # Errors
///
/// Returns `AppError::Validation` naming the first missing field (title,
/// content, then mood) without touching the store, or a store failure if the
/// write is rejected.
pub fn create_entry(store: &EntryStore, input: NewEntry) -> AppResult<Entry> {
    let mut entry = Entry::new(input.title, input.content, input.mood);
    if let Some(timestamp) = input.timestamp {
        entry = entry.with_timestamp(timestamp);
    }

    if let Err(e) = entry.validate() {
        debug!("Rejected new entry: {}", e);
        return Err(e);
    }

    let id = store.save(&entry)?;
    info!("Created entry {}", id);
    Ok(entry.with_id(id))
}
