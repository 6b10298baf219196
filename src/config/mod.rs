//! Configuration management for the moodlog application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MOODLOG_DB`: Path to the SQLite database file (defaults to ~/.moodlog/journal.db)
//! - `MOODLOG_LOG_FORMAT`: `text` (default) or `json`
//! - `HOME`: Used for expanding the default database path

use crate::constants::{
    DEFAULT_DB_SUBPATH, ENV_VAR_HOME, ENV_VAR_MOODLOG_DB, ENV_VAR_MOODLOG_LOG_FORMAT,
    LOG_FORMAT_JSON, LOG_FORMAT_TEXT, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            LOG_FORMAT_TEXT => Ok(LogFormat::Text),
            LOG_FORMAT_JSON => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "Invalid log format '{}'. Expected '{}' or '{}'",
                other, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            ))),
        }
    }
}

/// Configuration for the moodlog application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use moodlog::config::{Config, LogFormat};
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("/path/to/journal.db"),
///     log_format: LogFormat::Text,
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// SQLite database file holding the entries table.
    ///
    /// Loaded from `MOODLOG_DB`, falling back to `~/.moodlog/journal.db`.
    pub db_path: PathBuf,

    /// Log output format, from `MOODLOG_LOG_FORMAT`.
    pub log_format: LogFormat,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_path", &REDACTED_PLACEHOLDER)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from(""),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The database path is expanded with `shellexpand`, so `~` and `$VAR`
    /// references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The database path expansion fails or yields an empty path
    /// - `MOODLOG_LOG_FORMAT` is neither `text` nor `json`
    pub fn load() -> AppResult<Self> {
        let db_path_str = env::var(ENV_VAR_MOODLOG_DB).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DB_SUBPATH)
        });

        let expanded_path = shellexpand::full(&db_path_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let db_path = PathBuf::from(expanded_path.into_owned());

        if db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        let log_format = match env::var(ENV_VAR_MOODLOG_LOG_FORMAT) {
            Ok(value) => value.parse()?,
            Err(_) => LogFormat::default(),
        };

        Ok(Config {
            db_path,
            log_format,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Database path is empty"
    /// - "Database path must be an absolute path"
    pub fn validate(&self) -> AppResult<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        if !self.db_path.is_absolute() {
            return Err(AppError::Config(
                "Database path must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn setup() {
        env::remove_var(ENV_VAR_MOODLOG_DB);
        env::remove_var(ENV_VAR_MOODLOG_LOG_FORMAT);
    }

    #[test]
    fn test_debug_impl_redacts_path() {
        let config = Config {
            db_path: PathBuf::from("/home/username/private/journal.db"),
            log_format: LogFormat::Json,
        };

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
        assert!(!debug_output.contains("/home/username/private"));
        assert!(debug_output.contains("Json"));
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        setup();
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("j.db");
        env::set_var(ENV_VAR_MOODLOG_DB, &db_path);
        env::set_var(ENV_VAR_MOODLOG_LOG_FORMAT, "JSON");

        let config = Config::load().unwrap();

        assert_eq!(config.db_path, db_path);
        assert_eq!(config.log_format, LogFormat::Json);
        setup();
    }

    #[test]
    #[serial]
    fn test_load_default_under_home() {
        setup();
        let original_home = env::var(ENV_VAR_HOME).ok();
        env::set_var(ENV_VAR_HOME, "/home/tester");

        let config = Config::load().unwrap();

        assert_eq!(config.db_path, PathBuf::from("/home/tester/.moodlog/journal.db"));
        assert_eq!(config.log_format, LogFormat::Text);

        match original_home {
            Some(val) => env::set_var(ENV_VAR_HOME, val),
            None => env::remove_var(ENV_VAR_HOME),
        }
    }

    #[test]
    #[serial]
    fn test_load_expands_tilde() {
        setup();
        env::set_var(ENV_VAR_MOODLOG_DB, "~/notes/j.db");

        let config = Config::load().unwrap();

        assert!(!config.db_path.to_string_lossy().starts_with('~'));
        assert!(config.db_path.ends_with("notes/j.db"));
        setup();
    }

    #[test]
    #[serial]
    fn test_invalid_log_format() {
        setup();
        env::set_var(ENV_VAR_MOODLOG_LOG_FORMAT, "yaml");

        let result = Config::load();

        assert!(matches!(result, Err(AppError::Config(_))));
        setup();
    }

    #[test]
    fn test_validate() {
        let relative = Config {
            db_path: PathBuf::from("relative/journal.db"),
            ..Config::default()
        };
        assert!(relative.validate().is_err());

        assert!(Config::default().validate().is_err());

        let absolute = Config {
            db_path: PathBuf::from("/tmp/journal.db"),
            ..Config::default()
        };
        assert!(absolute.validate().is_ok());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!(" Json ".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
