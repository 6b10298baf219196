//! Edit an existing journal entry.

use crate::entry::{Entry, Mood};
use crate::errors::{AppError, AppResult};
use crate::store::EntryStore;
use tracing::{debug, info};

/// Fields to change on an existing entry; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct EntryChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<Mood>,
}

impl EntryChanges {
    /// Whether any field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.mood.is_none()
    }

    fn apply(self, entry: &mut Entry) {
        if let Some(title) = self.title {
            entry.title = title;
        }
        if let Some(content) = self.content {
            entry.content = content;
        }
        if let Some(mood) = self.mood {
            entry.mood = mood;
        }
    }
}

/// Applies `changes` to entry `id` and saves it in place.
///
/// The timestamp moves to the current time, since it records the last edit.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no such entry exists, `AppError::Validation`
/// if the edit would leave the entry incomplete (the stored row is left as it
/// was), or a store failure.
pub fn edit_entry(store: &EntryStore, id: i64, changes: EntryChanges) -> AppResult<Entry> {
    let mut entry = store.get(id)?.ok_or(AppError::NotFound(id))?;

    changes.apply(&mut entry);
    entry.touch();

    if let Err(e) = entry.validate() {
        debug!("Rejected edit of entry {}: {}", id, e);
        return Err(e);
    }

    let saved_id = store.save(&entry)?;
    info!("Edited entry {}", saved_id);
    Ok(entry)
}
