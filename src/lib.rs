/*!
# Moodlog

Moodlog is a small personal diary: short entries, each with a title, some
content, a mood and a timestamp, kept in a single table of a local SQLite file.

## Core Features

- Write a new entry, tagged Angry, Bored, Happy or Sad
- List entries, most recent first
- Show, edit and delete entries by id
- Refuse to save an entry that lacks a title, content or mood

## Architecture

- `entry`: The `Entry` record, the `Mood` tag and completeness checks
- `db`: Pooled SQLite access, schema and row-level SQL
- `store`: `EntryStore`, the one access point to stored entries
- `ops`: User-level operations (create, edit, read, delete)
- `display`: Relative dates, mood emoji and text rendering
- `cli`, `config`, `errors`, `constants`: Ambient plumbing

## Usage Example

```rust
use moodlog::ops::{self, NewEntry};
use moodlog::{EntryStore, Mood};

fn main() -> moodlog::AppResult<()> {
    let store = EntryStore::open_in_memory()?;

    let entry = ops::create_entry(
        &store,
        NewEntry {
            title: "Trip".to_string(),
            content: "Went hiking".to_string(),
            mood: Mood::Happy,
            timestamp: None,
        },
    )?;

    assert_eq!(store.get(entry.id.unwrap())?.unwrap().title, "Trip");
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// SQLite access for the entries table
pub mod db;
/// Presentation helpers
pub mod display;
/// The journal entry data model
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// High-level operations
pub mod ops;
/// The entry store
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use entry::{Entry, MissingField, Mood};
pub use errors::{AppError, AppResult};
pub use store::EntryStore;
