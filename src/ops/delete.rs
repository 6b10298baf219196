//! Delete a journal entry.

use crate::errors::AppResult;
use crate::store::EntryStore;

/// Deletes entry `id`, returning how many rows were removed.
///
/// An unknown id is not an error; it simply removes nothing.
pub fn delete_entry(store: &EntryStore, id: i64) -> AppResult<usize> {
    store.delete(id)
}
