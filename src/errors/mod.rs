//! Error handling utilities for the moodlog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Errors fall into three groups:
//!
//! - validation failures (`AppError::Validation`), raised before anything
//!   touches storage when an entry lacks a title, content or mood
//! - lookups that found nothing (`AppError::NotFound`)
//! - store failures (`AppError::Database`), covering every SQLite or pool error

use crate::entry::MissingField;
use thiserror::Error;

/// Represents specific error cases that can occur during database operations.
///
/// # Examples
///
/// ```
/// use moodlog::errors::DatabaseError;
///
/// let error = DatabaseError::Downgrade { found: 5, supported: 3 };
/// assert!(format!("{}", error).contains("newer version"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error.
    #[error("Store unavailable: {0}\n\nIf you're seeing 'file is not a database' or 'disk I/O error', this may indicate:\n- Corrupted database file\n- Full or read-only disk")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Store unavailable: failed to get connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// The database on disk was written by a newer schema than this build knows.
    #[error("Database was created by a newer version of moodlog (schema {found}, this build supports {supported})")]
    Downgrade {
        /// Version recorded in the database file
        found: i32,
        /// Highest version this build understands
        supported: i32,
    },
}

/// Represents all possible errors that can occur in the moodlog application.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// ```
/// use moodlog::entry::MissingField;
/// use moodlog::errors::AppError;
///
/// let error = AppError::Validation(MissingField::Mood);
/// assert_eq!(format!("{}", error), "Please pick a mood");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The entry is incomplete and must not be persisted.
    ///
    /// Displays the field-specific prompt shown to the user.
    #[error("{}", .0.prompt())]
    Validation(MissingField),

    /// No entry exists with the requested id.
    #[error("Entry {0} not found")]
    NotFound(i64),

    /// A mood tag outside the closed set.
    #[error("Unknown mood '{0}'. Expected one of: Angry, Bored, Happy, Sad")]
    InvalidMood(String),

    /// A timestamp argument that could not be parsed.
    #[error("Invalid timestamp '{0}'. Expected YYYY-MM-DD HH:MM[:SS]")]
    InvalidTimestamp(String),

    /// Errors related to database operations.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Failure rendering entries as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Database(DatabaseError::Sqlite(err))
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Database(DatabaseError::Pool(err))
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use moodlog::errors::{AppError, AppResult};
///
/// fn might_fail() -> AppResult<i64> {
///     if false {
///         return Err(AppError::NotFound(7));
///     }
///     Ok(7)
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
