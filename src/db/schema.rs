//! Database schema definitions and initialization.
//!
//! The database holds a single `entries` table. Its version is tracked in
//! SQLite's `PRAGMA user_version`.
//!
//! # Upgrade policy
//!
//! Upgrading is lossy: when the stored version is older than
//! [`SCHEMA_VERSION`], the table is dropped and recreated and every existing
//! entry is discarded. A database written by a newer schema is refused rather
//! than touched. Replacing this with additive migrations is the way to keep
//! data across upgrades.

use crate::constants::{
    COLUMN_CONTENT, COLUMN_ID, COLUMN_MOOD, COLUMN_TIMESTAMP, COLUMN_TITLE, TABLE_ENTRIES,
};
use crate::errors::{AppResult, DatabaseError};
use rusqlite::Connection;
use tracing::{debug, info, warn};

pub use crate::constants::SCHEMA_VERSION;

/// Creates the entries table and its index if they don't exist.
///
/// This function is idempotent - it uses `CREATE TABLE IF NOT EXISTS`
/// so it's safe to call multiple times.
///
/// # Errors
///
/// Returns an error if any DDL statement fails.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    debug!("Creating database tables");

    conn.execute_batch(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            {id} INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE,
            {title} TEXT NOT NULL,
            {content} TEXT NOT NULL,
            {mood} TEXT,
            {timestamp} TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_entries_timestamp ON {table}({timestamp} DESC);
        "#,
        table = TABLE_ENTRIES,
        id = COLUMN_ID,
        title = COLUMN_TITLE,
        content = COLUMN_CONTENT,
        mood = COLUMN_MOOD,
        timestamp = COLUMN_TIMESTAMP,
    ))
    .map_err(DatabaseError::Sqlite)?;

    debug!("Database tables created successfully");
    Ok(())
}

/// Drops the entries table. All rows are lost.
pub fn drop_tables(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(&format!("DROP TABLE IF EXISTS {};", TABLE_ENTRIES))
        .map_err(DatabaseError::Sqlite)?;
    Ok(())
}

/// Brings the database up to [`SCHEMA_VERSION`].
///
/// - version 0 (fresh file): create the table
/// - older version: drop and recreate the table
/// - same version: make sure the table exists
/// - newer version: refuse with [`DatabaseError::Downgrade`]
///
/// Everything happens in one transaction.
///
/// # Errors
///
/// Returns an error if a statement fails or the file is from a newer schema.
pub fn initialize(conn: &mut Connection) -> AppResult<()> {
    let tx = conn.transaction().map_err(DatabaseError::Sqlite)?;
    let stored = get_schema_version(&tx)?;

    if stored > SCHEMA_VERSION {
        return Err(DatabaseError::Downgrade {
            found: stored,
            supported: SCHEMA_VERSION,
        }
        .into());
    }

    if stored == 0 {
        info!("Creating schema version {}", SCHEMA_VERSION);
    } else if stored < SCHEMA_VERSION {
        warn!(
            "Upgrading schema from version {} to {}: dropping all existing entries",
            stored, SCHEMA_VERSION
        );
        drop_tables(&tx)?;
    } else {
        debug!("Schema version {} is current", stored);
    }

    create_tables(&tx)?;
    set_schema_version(&tx, SCHEMA_VERSION)?;
    tx.commit().map_err(DatabaseError::Sqlite)?;
    Ok(())
}

/// Gets the schema version recorded in the database file; 0 when unset.
///
/// # Errors
///
/// Returns an error if the pragma cannot be read.
pub fn get_schema_version(conn: &Connection) -> AppResult<i32> {
    let version = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(DatabaseError::Sqlite)?;
    Ok(version)
}

/// Records `version` in `PRAGMA user_version`.
pub fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.pragma_update(None, "user_version", version)
        .map_err(DatabaseError::Sqlite)?;
    Ok(())
}
