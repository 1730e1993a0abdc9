//! Journal entry data structure

use chrono::{DateTime, Local};

use crate::models::narration::format_timestamp;

/// A single journal entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    /// When the event happened (local time)
    pub timestamp: DateTime<Local>,

    /// Free-text description of the event
    pub message: String,
}

impl JournalEntry {
    /// Create an entry stamped with the current local time
    pub fn now(message: impl Into<String>) -> Self {
        Self::at(Local::now(), message)
    }

    /// Create an entry with an explicit timestamp
    pub fn at(timestamp: DateTime<Local>, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }

    /// Render the entry as written to the journal file
    pub fn render(&self) -> String {
        format!(
            "{}\n - {}\n\n",
            format_timestamp(&self.timestamp),
            self.message
        )
    }
}
