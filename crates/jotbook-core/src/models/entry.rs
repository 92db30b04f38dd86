//! Journal entry model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const TITLE_PREVIEW_CHARS: usize = 30;
const UNTITLED_ENTRY: &str = "Untitled Entry";

/// A unique identifier for a journal entry, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new unique entry ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A dated journal entry
///
/// `display_date` and `time` are rendered once when the entry is first
/// written and are carried unchanged through later edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier
    pub id: EntryId,
    /// Free-form text body
    pub content: String,
    /// Canonical timestamp of the last save (RFC 3339 on the wire)
    pub date: DateTime<Utc>,
    /// Human-readable date, e.g. "Wednesday, November 26, 2025"
    pub display_date: String,
    /// Human-readable time of day, e.g. "12:45 PM"
    pub time: String,
}

impl JournalEntry {
    /// Create a new entry stamped with the current local time
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self::written_at(content, &Local::now())
    }

    /// Create a new entry as if written at `now`
    #[must_use]
    pub fn written_at<Tz>(content: impl Into<String>, now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            id: EntryId::new(),
            content: content.into(),
            date: now.with_timezone(&Utc),
            display_date: format_display_date(now),
            time: format_display_time(now),
        }
    }

    /// Title shown in the history list
    ///
    /// Long content is cut to 30 characters with a trailing ellipsis; short
    /// content shows its first line.
    #[must_use]
    pub fn title_preview(&self) -> String {
        if self.content.is_empty() {
            return UNTITLED_ENTRY.to_string();
        }

        if self.content.chars().count() > TITLE_PREVIEW_CHARS {
            let head: String = self.content.chars().take(TITLE_PREVIEW_CHARS).collect();
            format!("{head}...")
        } else {
            self.content.lines().next().unwrap_or("").to_string()
        }
    }

    /// Check if entry content is empty (whitespace-only counts as empty)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Render a timestamp as "Wednesday, November 26, 2025"
pub fn format_display_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format("%A, %B %-d, %Y").to_string()
}

/// Render a timestamp as "12:45 PM"
pub fn format_display_time<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format("%-I:%M %p").to_string()
}
