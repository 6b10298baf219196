//! Read journal entries back.

use crate::entry::Entry;
use crate::errors::{AppError, AppResult};
use crate::store::EntryStore;
use tracing::debug;

/// All entries, most recent first.
pub fn list_entries(store: &EntryStore) -> AppResult<Vec<Entry>> {
    let entries = store.list_all()?;
    debug!("Loaded {} entries", entries.len());
    Ok(entries)
}

/// A single entry.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no entry has this id.
pub fn show_entry(store: &EntryStore, id: i64) -> AppResult<Entry> {
    store.get(id)?.ok_or(AppError::NotFound(id))
}
