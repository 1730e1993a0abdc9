//! Timestamped narration lines
//!
//! Narrations are plain text so they survive the line-oriented accounts
//! file unchanged. The timestamp uses the classic `ctime` layout in local
//! time, e.g. `Sat Oct 18 09:05:12 2026`.

use chrono::{DateTime, Local, TimeZone};

/// strftime layout matching `ctime(3)` without the trailing newline
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Render a timestamp in the narration layout
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Build a narration line stamped with the current local time
pub fn stamp(description: &str) -> String {
    stamp_at(&Local::now(), description)
}

/// Build a narration line stamped with the given time
pub fn stamp_at<Tz: TimeZone>(at: &DateTime<Tz>, description: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{} - {}", format_timestamp(at), description)
}
