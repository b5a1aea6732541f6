//! Chat line and speaker types.
//!
//! A [`ChatLine`] is one line of a WhatsApp export after structural parsing.
//! An empty [`user`](ChatLine::user) marks a line that didn't match the
//! export pattern; such lines never reach the corpus.
//!
//! # Example
//!
//! ```
//! use chatcorpus::message::{ChatLine, Speaker};
//!
//! let line = ChatLine::new("Alice", "Hello!");
//! let speaker = Speaker::classify(&line.user, "Bot");
//! assert_eq!(line.tagged(speaker), "[Human] Hello!");
//! ```

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Tag written in front of lines sent by the configured self user.
pub const SELF_TAG: &str = "[Bot]";

/// Tag written in front of lines sent by anyone else.
pub const OTHER_TAG: &str = "[Human]";

/// One parsed line of a chat export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatLine {
    /// When the message was sent. Exports carry local wall-clock time with
    /// no offset, so this stays naive.
    pub timestamp: Option<NaiveDateTime>,

    /// Display name of the sender. Empty if the line was unparseable.
    pub user: String,

    /// Message body. Empty if the line was unparseable.
    pub message: String,
}

impl ChatLine {
    /// Creates a line without a timestamp.
    pub fn new(user: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            user: user.into(),
            message: message.into(),
        }
    }

    /// Sets the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Returns `true` if the line matched the export pattern.
    pub fn is_parsed(&self) -> bool {
        !self.user.is_empty()
    }

    /// Formats the line as `"<tag> <message>"`.
    pub fn tagged(&self, speaker: Speaker) -> String {
        format!("{} {}", speaker.tag(), self.message)
    }
}

/// Which side of the conversation a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The user whose replies the model learns to imitate
    #[serde(rename = "self")]
    SelfUser,
    /// Every other participant
    Other,
}

impl Speaker {
    /// Classifies `user` against the configured self name (exact match).
    pub fn classify(user: &str, self_name: &str) -> Self {
        if user == self_name {
            Speaker::SelfUser
        } else {
            Speaker::Other
        }
    }

    /// Returns the corpus tag for this speaker.
    pub fn tag(self) -> &'static str {
        match self {
            Speaker::SelfUser => SELF_TAG,
            Speaker::Other => OTHER_TAG,
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
