//! Per-file processing: parse, filter, tag and session-split one export.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::config::CorpusConfig;
use crate::core::filter::has_invalid_sequence;
use crate::core::session::split_in_sessions;
use crate::error::{CorpusError, Result};
use crate::message::Speaker;
use crate::parsing::parse_line;

/// Splits export text into lines the way text-mode readers do.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A final empty piece after
/// the last terminator is dropped.
pub fn split_lines(content: &str) -> Vec<String> {
    let normalized = content.replace("\r\n", "\n");
    let mut lines: Vec<String> = normalized.split(['\n', '\r']).map(str::to_string).collect();
    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Counters collected while processing exports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Lines read from the input
    pub lines_read: usize,
    /// Lines written to the corpus as `"<tag> <message>"`
    pub lines_kept: usize,
    /// Lines not matching the export pattern
    pub unparsed: usize,
    /// Lines dropped for links or media placeholders
    pub invalid_sequences: usize,
    /// Lines whose date/time didn't match the configured format
    pub timestamp_errors: usize,
    /// Session tokens written, including the one opening each file
    pub session_tokens: usize,
}

impl ProcessingStats {
    /// Percentage of read lines that made it into the corpus.
    pub fn retention_ratio(&self) -> f64 {
        if self.lines_read == 0 {
            return 0.0;
        }
        (self.lines_kept as f64 / self.lines_read as f64) * 100.0
    }

    /// Lines dropped for any reason.
    pub fn dropped(&self) -> usize {
        self.unparsed + self.invalid_sequences + self.timestamp_errors
    }

    /// Adds another file's counters to this one.
    pub fn merge(&mut self, other: &ProcessingStats) {
        self.lines_read += other.lines_read;
        self.lines_kept += other.lines_kept;
        self.unparsed += other.unparsed;
        self.invalid_sequences += other.invalid_sequences;
        self.timestamp_errors += other.timestamp_errors;
        self.session_tokens += other.session_tokens;
    }
}

/// Processes export text already in memory.
///
/// The output opens with the session token when one is configured. Lines
/// that are unparsed, carry an invalid sequence, or have a malformed
/// timestamp are skipped and leave the session baseline untouched.
///
/// # Example
///
/// ```
/// use chatcorpus::config::CorpusConfig;
/// use chatcorpus::core::processor::parse_chat_str;
///
/// let config = CorpusConfig::new("Bot").with_session_token("<s>");
/// let export = "1/1/20, 10:00 - Alice: hi\n1/1/20, 10:01 - Bot: hello";
///
/// let (lines, stats) = parse_chat_str(export, &config);
/// assert_eq!(lines, ["<s>", "[Human] hi", "[Bot] hello"]);
/// assert_eq!(stats.lines_kept, 2);
/// ```
pub fn parse_chat_str(content: &str, config: &CorpusConfig) -> (Vec<String>, ProcessingStats) {
    let session_token = config.session_token();
    let mut stats = ProcessingStats::default();
    let mut chat_text: Vec<String> = Vec::new();

    if let Some(token) = session_token {
        chat_text.push(token.to_string());
        stats.session_tokens += 1;
    }

    let mut t_last: Option<NaiveDateTime> = None;

    for (idx, raw) in split_lines(content).iter().enumerate() {
        stats.lines_read += 1;

        let line = match parse_line(raw, &config.time_format) {
            Ok(line) => line,
            Err(e) => {
                debug!(line = idx + 1, "skipping line: {e}");
                stats.timestamp_errors += 1;
                continue;
            }
        };

        if !line.is_parsed() {
            stats.unparsed += 1;
            continue;
        }
        if has_invalid_sequence(&line.message) {
            stats.invalid_sequences += 1;
            continue;
        }

        if split_in_sessions(
            line.timestamp,
            t_last,
            &mut chat_text,
            config.delta_h_threshold,
            session_token,
        ) {
            stats.session_tokens += 1;
        }
        t_last = line.timestamp;

        let speaker = Speaker::classify(&line.user, &config.user_name);
        chat_text.push(line.tagged(speaker));
        stats.lines_kept += 1;
    }

    (chat_text, stats)
}

/// Reads and processes one export file, returning its lines and counters.
///
/// The file must be valid UTF-8; any read failure is fatal.
pub fn parse_chat_with_stats(
    file_path: impl AsRef<Path>,
    config: &CorpusConfig,
) -> Result<(Vec<String>, ProcessingStats)> {
    let path = file_path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
    let (lines, stats) = parse_chat_str(&content, config);
    debug!(
        file = %path.display(),
        read = stats.lines_read,
        kept = stats.lines_kept,
        dropped = stats.dropped(),
        "processed chat"
    );
    Ok((lines, stats))
}

/// Reads and processes one export file.
pub fn parse_chat(file_path: impl AsRef<Path>, config: &CorpusConfig) -> Result<Vec<String>> {
    parse_chat_with_stats(file_path, config).map(|(lines, _)| lines)
}
