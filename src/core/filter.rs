//! Drop lines whose body carries links or media placeholders.
//!
//! Matching is a plain, case-sensitive substring search with no notion of
//! word boundaries: `"wwwhat"` is rejected just like `"www.example.com"`.
//!
//! ```
//! use chatcorpus::core::filter::has_invalid_sequence;
//!
//! assert!(has_invalid_sequence("check www.example.com"));
//! assert!(has_invalid_sequence("<Media omitted>"));
//! assert!(!has_invalid_sequence("see you at 8"));
//! ```

/// Substrings that disqualify a message body.
pub const INVALID_SEQUENCES: [&str; 3] = ["https", "www", "<Media omitted>"];

/// Returns `true` if `text` contains any of [`INVALID_SEQUENCES`].
pub fn has_invalid_sequence(text: &str) -> bool {
    INVALID_SEQUENCES.iter().any(|seq| text.contains(seq))
}
