//! Constants used throughout the application.
//!
//! This module contains all constants used in the moodlog application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodlog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A small mood-tagged diary kept in a local SQLite file";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the database file.
pub const ENV_VAR_MOODLOG_DB: &str = "MOODLOG_DB";
/// Environment variable for specifying the log output format.
pub const ENV_VAR_MOODLOG_LOG_FORMAT: &str = "MOODLOG_LOG_FORMAT";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default database location relative to the user's home directory.
pub const DEFAULT_DB_SUBPATH: &str = ".moodlog/journal.db";

// Validation
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Storage
/// Current schema version, stored in `PRAGMA user_version`.
///
/// Any increase drops and recreates the entries table.
pub const SCHEMA_VERSION: i32 = 3;
/// Name of the single entries table.
pub const TABLE_ENTRIES: &str = "entries";
/// Surrogate primary key column.
pub const COLUMN_ID: &str = "_id";
/// Title column.
pub const COLUMN_TITLE: &str = "title";
/// Content column.
pub const COLUMN_CONTENT: &str = "content";
/// Mood tag column.
pub const COLUMN_MOOD: &str = "mood";
/// Timestamp column.
pub const COLUMN_TIMESTAMP: &str = "entryDate";
/// Maximum pooled connections for a file-backed database.
pub const POOL_MAX_SIZE: u32 = 4;
/// How long a connection waits on a locked database before failing.
pub const BUSY_TIMEOUT_MS: u64 = 5_000;

// Date/Time Logic
/// Storage format for entry timestamps.
pub const TIMESTAMP_STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date and minute format used by the detail view.
pub const DATETIME_FORMAT_DETAIL: &str = "%Y-%m-%d %H:%M";
/// Accepted formats for timestamps given on the command line.
pub const TIMESTAMP_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];
/// Entries younger than this are shown with a relative time.
pub const RELATIVE_TIME_WINDOW_HOURS: i64 = 48;

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "moodlog";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
