//! Corpus writers.
//!
//! - [`write_text`] / [`to_text`] - newline-joined UTF-8 text, the format
//!   GPT-2 fine-tuning consumes directly
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatcorpus::Result<()> {
//! use chatcorpus::core::output::{to_text, write_text};
//!
//! let lines = vec!["[Human] hi".to_string(), "[Bot] hello".to_string()];
//!
//! write_text(&lines, "data/parsed/dataset.txt")?;
//! assert_eq!(to_text(&lines), "[Human] hi\n[Bot] hello");
//! # Ok(())
//! # }
//! ```

mod text_writer;

pub use text_writer::{to_text, write_text};
