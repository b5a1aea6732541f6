//! WhatsApp TXT line parser.
//!
//! Each exported message line looks like:
//!
//! ```text
//! 12/31/19, 23:59 - Alice: Happy new year!
//! ```
//!
//! The date, time and sender are matched lazily, so the first `", "`,
//! the first `" - "` after it and the first `": "` after that delimit the
//! fields. Whatever follows is the message body, colons included.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::{CorpusError, Result};
use crate::message::ChatLine;

/// Default datetime format (`month/day/2-digit-year, 24h`).
pub const DEFAULT_TIME_FORMAT: &str = "%m/%d/%y, %H:%M";

// {date}, {time} - {user}: {message}
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(.+?), (.+?) - (.+?): (.+)$").expect("line pattern is a valid regex")
});

/// Borrowed fields of a structurally valid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub user: &'a str,
    pub message: &'a str,
}

/// Splits a line into its four fields without interpreting the date.
///
/// A trailing `\n` or `\r\n` is ignored. Returns `None` if the line doesn't
/// have the `", " ... " - " ... ": "` shape or any field would be empty.
pub fn split_line(line: &str) -> Option<RawFields<'_>> {
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);

    let caps = LINE_PATTERN.captures(line)?;
    Some(RawFields {
        date: caps.get(1)?.as_str(),
        time: caps.get(2)?.as_str(),
        user: caps.get(3)?.as_str(),
        message: caps.get(4)?.as_str(),
    })
}

/// Parses `"<date>, <time>"` with a chrono format string.
pub fn parse_timestamp(date: &str, time: &str, format: &str) -> Result<NaiveDateTime> {
    let input = format!("{date}, {time}");
    NaiveDateTime::parse_from_str(&input, format)
        .map_err(|source| CorpusError::timestamp(input, format, source))
}

/// Parses one export line.
///
/// - Structural mismatch: `Ok` with an empty [`ChatLine`] (no timestamp,
///   empty user and message).
/// - Date/time not matching `datetime_format`: `Err(CorpusError::Timestamp)`.
///   This is a per-line failure; callers are expected to skip the line.
///
/// # Example
///
/// ```
/// use chatcorpus::parsing::{parse_line, DEFAULT_TIME_FORMAT};
///
/// let line = parse_line("1/15/20, 10:30 - Alice: Hi: how are you?", DEFAULT_TIME_FORMAT)?;
/// assert_eq!(line.user, "Alice");
/// assert_eq!(line.message, "Hi: how are you?");
/// assert!(line.timestamp.is_some());
///
/// let noise = parse_line("just a continuation line", DEFAULT_TIME_FORMAT)?;
/// assert!(!noise.is_parsed());
/// # Ok::<(), chatcorpus::CorpusError>(())
/// ```
pub fn parse_line(line: &str, datetime_format: &str) -> Result<ChatLine> {
    let Some(fields) = split_line(line) else {
        return Ok(ChatLine::default());
    };

    let timestamp = parse_timestamp(fields.date, fields.time, datetime_format)?;
    Ok(ChatLine {
        timestamp: Some(timestamp),
        user: fields.user.to_string(),
        message: fields.message.to_string(),
    })
}
