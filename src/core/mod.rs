//! Core processing logic for chatcorpus.
//!
//! This module contains:
//! - [`filter`] - Invalid-sequence detection (links, media placeholders)
//! - [`session`] - Session-break insertion after long gaps
//! - [`processor`] - Per-file parsing, filtering and speaker tagging
//! - [`output`] - Corpus text writer
//!
//! # Quick Start
//!
//! ```rust
//! use chatcorpus::core::{has_invalid_sequence, parse_chat_str, to_text};
//! use chatcorpus::config::CorpusConfig;
//!
//! let config = CorpusConfig::new("Bot");
//! let (lines, _stats) = parse_chat_str("1/1/20, 10:00 - Bot: hey", &config);
//! assert_eq!(to_text(&lines), "[Bot] hey");
//! assert!(!has_invalid_sequence("hey"));
//! ```

pub mod filter;
pub mod output;
pub mod processor;
pub mod session;

pub use filter::{INVALID_SEQUENCES, has_invalid_sequence};
pub use output::{to_text, write_text};
pub use processor::{
    ProcessingStats, parse_chat, parse_chat_str, parse_chat_with_stats, split_lines,
};
pub use session::{elapsed_hours, split_in_sessions};
