//! Line-level parsing of chat exports.
//!
//! Only the Android-style WhatsApp layout
//! `"<date>, <time> - <user>: <message>"` is understood. Anything else
//! (multi-line continuations, system notices without a sender) is reported
//! as unparsed and dropped by the processor.

pub mod whatsapp;

pub use whatsapp::{DEFAULT_TIME_FORMAT, RawFields, parse_line, parse_timestamp, split_line};
