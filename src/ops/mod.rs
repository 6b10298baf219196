//! High-level journaling operations.
//!
//! This module provides the user-facing operations the command line (or any
//! other front end) drives: writing a new entry, editing one, reading entries
//! back, and deleting. Each takes the [`EntryStore`](crate::store::EntryStore)
//! it works on explicitly.

pub mod create;
pub mod delete;
pub mod edit;
pub mod read;

// Re-export commonly used functions
pub use create::{create_entry, NewEntry};
pub use delete::delete_entry;
pub use edit::{edit_entry, EntryChanges};
pub use read::{list_entries, show_entry};
