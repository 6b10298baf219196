//! Database operations for journal entries.
//!
//! This module provides SQLite database operations for storing mood-tagged
//! journal entries. It uses connection pooling via r2d2 so one handle can be
//! shared across threads.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions, versioning and the upgrade policy
//! - `entries`: Entry CRUD operations
//!
//! # Example
//!
//! ```no_run
//! use moodlog::db::Database;
//! use std::path::Path;
//!
//! let db = Database::open(Path::new("/tmp/moodlog.db"))?;
//! let conn = db.get_conn()?;
//! let entries = moodlog::db::entries::list_entries(&conn)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod entries;
pub mod schema;

use crate::constants::{BUSY_TIMEOUT_MS, POOL_MAX_SIZE};
use crate::errors::{AppResult, DatabaseError};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Database handle with connection pooling.
///
/// Opening a `Database` also brings its schema up to date, so every handle
/// returned by [`Database::open`] or [`Database::open_in_memory`] is ready
/// for queries.
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Opens or creates a SQLite database file.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - Database file cannot be opened
    /// - The schema cannot be initialized or is newer than this build
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let manager = SqliteConnectionManager::file(db_path);
        let db = Self::with_manager(manager, POOL_MAX_SIZE)?;

        info!("Database opened successfully");
        Ok(db)
    }

    /// Opens a private in-memory database.
    ///
    /// The pool holds a single connection so every checkout sees the same data.
    pub fn open_in_memory() -> AppResult<Self> {
        debug!("Opening in-memory database");
        Self::with_manager(SqliteConnectionManager::memory(), 1)
    }

    fn with_manager(manager: SqliteConnectionManager, max_size: u32) -> AppResult<Self> {
        let pool = Pool::builder()
            .max_size(max_size)
            .connection_customizer(Box::new(ConnectionConfig {
                busy_timeout: Duration::from_millis(BUSY_TIMEOUT_MS),
            }))
            .build(manager)
            .map_err(DatabaseError::Pool)?;

        let db = Database { pool };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or the pool is exhausted.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| DatabaseError::Pool(e).into())
    }

    /// Initializes the database schema.
    ///
    /// Creates the entries table if it doesn't exist and applies the upgrade
    /// policy in [`schema::initialize`]. Safe to call multiple times.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let mut conn = self.get_conn()?;
        schema::initialize(&mut conn)?;
        info!("Database schema initialized");
        Ok(())
    }
}

/// Connection customizer applied to every pooled connection.
#[derive(Debug)]
struct ConnectionConfig {
    busy_timeout: Duration,
}

impl r2d2::CustomizeConnection<Connection, rusqlite::Error> for ConnectionConfig {
    fn on_acquire(&self, conn: &mut Connection) -> Result<(), rusqlite::Error> {
        conn.busy_timeout(self.busy_timeout)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(())
    }

    fn on_release(&self, _conn: Connection) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, Mood};
    use tempfile::TempDir;

    #[test]
    fn test_database_open_and_connect() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let db = Database::open(&db_path).unwrap();
        let conn = db.get_conn().unwrap();

        let result: i32 = conn
            .query_row("SELECT 1 + 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(result, 2);
        assert!(db_path.exists());
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("dir").join("test.db");

        Database::open(&db_path).unwrap();

        assert!(db_path.exists());
    }

    #[test]
    fn test_data_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let id = {
            let db = Database::open(&db_path).unwrap();
            let conn = db.get_conn().unwrap();
            entries::upsert_entry(&conn, &Entry::new("t", "c", Mood::Happy)).unwrap()
        };

        let db = Database::open(&db_path).unwrap();
        let conn = db.get_conn().unwrap();
        assert!(entries::get_entry(&conn, id).unwrap().is_some());
    }

    #[test]
    fn test_in_memory_connections_share_data() {
        let db = Database::open_in_memory().unwrap();

        {
            let conn = db.get_conn().unwrap();
            entries::upsert_entry(&conn, &Entry::new("t", "c", Mood::Happy)).unwrap();
        }

        let conn = db.get_conn().unwrap();
        assert_eq!(entries::count_entries(&conn).unwrap(), 1);
    }

    #[test]
    fn test_initialize_schema_idempotent() {
        let db = Database::open_in_memory().unwrap();

        db.initialize_schema().unwrap();
        db.initialize_schema().unwrap();
    }
}
