//! Presentation helpers for listing and showing entries.
//!
//! Recent entries get a relative time ("5 min. ago", "yesterday"); anything
//! older than [`RELATIVE_TIME_WINDOW_HOURS`] is shown as a plain date.

use crate::constants::{DATETIME_FORMAT_DETAIL, DATE_FORMAT_ISO, RELATIVE_TIME_WINDOW_HOURS};
use crate::entry::{Entry, Mood};
use chrono::{Duration, NaiveDateTime};

impl Mood {
    /// Emoji shown next to an entry; empty for `Unknown`.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Angry => "😠",
            Mood::Bored => "😐",
            Mood::Happy => "😄",
            Mood::Sad => "😢",
            Mood::Unknown => "",
        }
    }
}

/// Formats `timestamp` relative to `now`.
///
/// Timestamps in the future, or at least 48 hours old, fall back to `YYYY-MM-DD`.
pub fn format_relative(timestamp: NaiveDateTime, now: NaiveDateTime) -> String {
    let elapsed = now - timestamp;

    if elapsed < Duration::zero() || elapsed >= Duration::hours(RELATIVE_TIME_WINDOW_HOURS) {
        return timestamp.format(DATE_FORMAT_ISO).to_string();
    }

    if elapsed < Duration::minutes(1) {
        "just now".to_string()
    } else if elapsed < Duration::hours(1) {
        format!("{} min. ago", elapsed.num_minutes())
    } else if elapsed < Duration::hours(24) {
        format!("{} hr. ago", elapsed.num_hours())
    } else {
        "yesterday".to_string()
    }
}

/// Formats a timestamp for the detail view.
pub fn format_full(timestamp: NaiveDateTime) -> String {
    timestamp.format(DATETIME_FORMAT_DETAIL).to_string()
}

/// One line of the entry list.
pub fn render_row(entry: &Entry, now: NaiveDateTime) -> String {
    let id = entry
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let emoji = entry.mood.emoji();
    let when = format_relative(entry.timestamp, now);

    if emoji.is_empty() {
        format!("{:>4}  {} ({}) · {}", id, entry.title, entry.mood, when)
    } else {
        format!(
            "{:>4}  {} {} ({}) · {}",
            id, emoji, entry.title, entry.mood, when
        )
    }
}

/// The full detail block for a single entry.
pub fn render_detail(entry: &Entry) -> String {
    let heading = match entry.mood.emoji() {
        "" => entry.title.clone(),
        emoji => format!("{} {}", emoji, entry.title),
    };

    format!(
        "{}\n{} · {}\n\n{}",
        heading,
        entry.mood,
        format_full(entry.timestamp),
        entry.content
    )
}
