//! The journal entry data model.
//!
//! An [`Entry`] is built in memory when a user starts writing (no id, mood
//! [`Mood::Unknown`], timestamp now) or hydrated from a stored row (id present).
//! It is edited in place and handed to the store for an upsert. Whether it may be
//! persisted at all is decided by [`Entry::missing_field`].

use crate::constants::TIMESTAMP_INPUT_FORMATS;
use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Emotional state attached to an entry.
///
/// `Unknown` means the user has not picked a mood yet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Angry,
    Bored,
    Happy,
    Sad,
    #[default]
    Unknown,
}

impl Mood {
    /// The moods a user can actually pick.
    pub const ALL: [Mood; 4] = [Mood::Angry, Mood::Bored, Mood::Happy, Mood::Sad];

    /// Canonical text tag, as stored in the `mood` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Angry => "Angry",
            Mood::Bored => "Bored",
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Unknown => "Unknown",
        }
    }

    /// Returns `false` only for [`Mood::Unknown`].
    pub fn is_set(&self) -> bool {
        !matches!(self, Mood::Unknown)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = AppError;

    /// Parses a mood tag case-insensitively. An empty tag is `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "angry" => Ok(Mood::Angry),
            "bored" => Ok(Mood::Bored),
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "unknown" | "" => Ok(Mood::Unknown),
            _ => Err(AppError::InvalidMood(s.to_string())),
        }
    }
}

/// Which piece of user input an entry still lacks.
///
/// Checked in the order title, content, mood; only the first gap is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Nothing,
    Title,
    Content,
    Mood,
}

impl MissingField {
    /// The message shown to the user when a save is rejected.
    pub fn prompt(&self) -> &'static str {
        match self {
            MissingField::Nothing => "",
            MissingField::Title => "Please write a title",
            MissingField::Content => "Please write some content",
            MissingField::Mood => "Please pick a mood",
        }
    }
}

/// One journal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Row id assigned by the store; `None` until first saved.
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    /// Creation or last-edit moment, local wall-clock time.
    pub timestamp: NaiveDateTime,
}

impl Entry {
    /// Creates an unsaved entry stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>, mood: Mood) -> Self {
        Entry {
            id: None,
            title: title.into(),
            content: content.into(),
            mood,
            timestamp: now(),
        }
    }

    /// The starting point for a brand new entry: empty text, no mood.
    pub fn blank() -> Self {
        Entry::new("", "", Mood::Unknown)
    }

    /// Replaces the timestamp.
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Sets the id; used when hydrating rows and after a save.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether this entry has been persisted.
    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    /// Restamps the entry with the current time.
    pub fn touch(&mut self) {
        self.timestamp = now();
    }

    /// Reports the first missing piece of input, or [`MissingField::Nothing`].
    pub fn missing_field(&self) -> MissingField {
        if self.title.is_empty() {
            MissingField::Title
        } else if self.content.is_empty() {
            MissingField::Content
        } else if !self.mood.is_set() {
            MissingField::Mood
        } else {
            MissingField::Nothing
        }
    }

    /// An entry may be persisted only when nothing is missing.
    pub fn is_complete(&self) -> bool {
        self.missing_field() == MissingField::Nothing
    }

    /// Returns `Err(AppError::Validation)` naming the missing field, if any.
    pub fn validate(&self) -> AppResult<()> {
        match self.missing_field() {
            MissingField::Nothing => Ok(()),
            missing => Err(AppError::Validation(missing)),
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Entry::blank()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}: {}", self.timestamp, self.title, self.content)
    }
}

/// Current local time without a zone.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parses a user-supplied timestamp such as `2023-01-01 10:00`.
pub fn parse_timestamp(input: &str) -> AppResult<NaiveDateTime> {
    let trimmed = input.trim();
    TIMESTAMP_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| AppError::InvalidTimestamp(input.to_string()))
}
