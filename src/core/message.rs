//! Commit message selection.

use chrono::{DateTime, Local};

/// Prefix of the generated message when no words were given.
const DEFAULT_MESSAGE_PREFIX: &str = "Update portfolio - ";

/// Timestamp layout of the generated message.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Pick the commit message for this run.
///
/// Words are joined with single spaces, untouched otherwise. With no words,
/// a message stamped with `now` (local time) is generated.
pub fn commit_message(words: &[String], now: DateTime<Local>) -> String {
    if words.is_empty() {
        format!("{DEFAULT_MESSAGE_PREFIX}{}", now.format(TIMESTAMP_FORMAT))
    } else {
        words.join(" ")
    }
}
