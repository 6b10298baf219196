//! Command-line argument model.

use crate::config::LogFormat;
use crate::entry::{parse_timestamp, Mood};
use crate::errors::AppResult;
use crate::ops::{EntryChanges, NewEntry};
use clap::{Parser, Subcommand};

/// A small mood-tagged diary kept in a local SQLite file
#[derive(Parser, Debug)]
#[command(name = "moodlog", author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format: text or json
    #[arg(long, global = true, value_parser = parse_log_format)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List all entries, most recent first
    List {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single entry
    Show {
        /// Entry id
        id: i64,

        /// Print the entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a new entry
    New {
        /// Entry title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Entry body
        #[arg(short, long, default_value = "")]
        content: String,

        /// One of Angry, Bored, Happy, Sad
        #[arg(short, long, default_value = "")]
        mood: String,

        /// Timestamp (YYYY-MM-DD HH:MM[:SS]); defaults to now
        #[arg(long)]
        at: Option<String>,
    },

    /// Change an existing entry
    Edit {
        /// Entry id
        id: i64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New body
        #[arg(short, long)]
        content: Option<String>,

        /// New mood
        #[arg(short, long)]
        mood: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: i64,
    },
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    s.parse::<LogFormat>().map_err(|e| e.to_string())
}

impl Command {
    /// Builds the input for a `new` command.
    ///
    /// Only mood and timestamp syntax are checked here; missing fields are
    /// reported by the create operation.
    pub fn new_entry(
        title: &str,
        content: &str,
        mood: &str,
        at: Option<&str>,
    ) -> AppResult<NewEntry> {
        Ok(NewEntry {
            title: title.to_string(),
            content: content.to_string(),
            mood: mood.parse::<Mood>()?,
            timestamp: at.map(parse_timestamp).transpose()?,
        })
    }

    /// Builds the changes for an `edit` command.
    pub fn entry_changes(
        title: Option<&str>,
        content: Option<&str>,
        mood: Option<&str>,
    ) -> AppResult<EntryChanges> {
        Ok(EntryChanges {
            title: title.map(str::to_string),
            content: content.map(str::to_string),
            mood: mood.map(str::parse::<Mood>).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_list_command() {
        let args = CliArgs::parse_from(["moodlog", "list"]);
        assert_eq!(args.command, Command::List { json: false });
        assert!(!args.verbose);
        assert!(args.log_format.is_none());

        let args = CliArgs::parse_from(["moodlog", "list", "--json"]);
        assert_eq!(args.command, Command::List { json: true });
    }

    #[test]
    fn test_global_flags() {
        let args = CliArgs::parse_from(["moodlog", "-v", "--log-format", "json", "show", "3"]);
        assert!(args.verbose);
        assert_eq!(args.log_format, Some(LogFormat::Json));
        assert_eq!(args.command, Command::Show { id: 3, json: false });

        let args = CliArgs::parse_from(["moodlog", "delete", "4", "--verbose"]);
        assert!(args.verbose);
        assert_eq!(args.command, Command::Delete { id: 4 });
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let result = CliArgs::try_parse_from(["moodlog", "--log-format", "xml", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_command() {
        let args = CliArgs::parse_from([
            "moodlog",
            "new",
            "--title",
            "Trip",
            "-c",
            "Went hiking",
            "--mood",
            "happy",
            "--at",
            "2023-01-01 10:00",
        ]);

        match args.command {
            Command::New {
                title,
                content,
                mood,
                at,
            } => {
                let input = Command::new_entry(&title, &content, &mood, at.as_deref()).unwrap();
                assert_eq!(input.title, "Trip");
                assert_eq!(input.content, "Went hiking");
                assert_eq!(input.mood, Mood::Happy);
                assert!(input.timestamp.is_some());
            }
            other => panic!("Expected New command, got {:?}", other),
        }
    }

    #[test]
    fn test_new_command_defaults_leave_fields_empty() {
        let args = CliArgs::parse_from(["moodlog", "new"]);

        match args.command {
            Command::New {
                title,
                content,
                mood,
                at,
            } => {
                let input = Command::new_entry(&title, &content, &mood, at.as_deref()).unwrap();
                assert!(input.title.is_empty());
                assert_eq!(input.mood, Mood::Unknown);
                assert!(input.timestamp.is_none());
            }
            other => panic!("Expected New command, got {:?}", other),
        }
    }

    #[test]
    fn test_new_entry_rejects_bad_mood_and_timestamp() {
        assert!(matches!(
            Command::new_entry("t", "c", "elated", None),
            Err(AppError::InvalidMood(_))
        ));
        assert!(matches!(
            Command::new_entry("t", "c", "sad", Some("noon")),
            Err(AppError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_edit_command() {
        let args = CliArgs::parse_from(["moodlog", "edit", "2", "--mood", "Sad"]);
        assert_eq!(
            args.command,
            Command::Edit {
                id: 2,
                title: None,
                content: None,
                mood: Some("Sad".to_string()),
            }
        );

        let changes = Command::entry_changes(None, None, Some("Sad")).unwrap();
        assert_eq!(changes.mood, Some(Mood::Sad));
        assert!(changes.title.is_none());
    }
}
