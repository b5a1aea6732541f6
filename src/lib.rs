//! # chatcorpus
//!
//! Turns WhatsApp chat exports into a newline-delimited corpus for GPT-2
//! fine-tuning.
//!
//! Each exported line `"<date>, <time> - <user>: <message>"` becomes
//! `"[Bot] <message>"` when sent by the configured user and
//! `"[Human] <message>"` otherwise. Lines with links or media placeholders
//! are dropped, and an optional session token marks the start of every chat
//! and every gap of `delta_h_threshold` hours or more.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatcorpus::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = CorpusConfig::new("Jane Doe")
//!         .with_chats_path("../data/raw/")
//!         .with_output_path("../data/parsed/")
//!         .with_session_token("<|endoftext|>");
//!
//!     let report = run(&config)?;
//!     println!("wrote {} lines", report.line_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] — line parser ([`parse_line`](parsing::parse_line))
//! - [`core`] — filtering, session splitting, per-file processing, text output
//! - [`corpus`] — directory discovery and the full [`run`](corpus::run)
//! - [`config`] — [`CorpusConfig`](config::CorpusConfig), [`TrainingConfig`](config::TrainingConfig)
//! - [`model`] — [`LanguageModel`](model::LanguageModel) backend contract, `train` / `generate`
//! - [`message`] — [`ChatLine`](message::ChatLine), [`Speaker`](message::Speaker), tags
//! - [`cli`] — clap arguments (feature `cli`)
//! - [`error`] — [`CorpusError`], [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod message;
pub mod model;
pub mod parsing;

pub use error::{CorpusError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatcorpus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{CorpusError, Result};

    pub use crate::config::{CorpusConfig, DATASET_FILE_NAME, RestoreFrom, TrainingConfig};

    pub use crate::message::{ChatLine, OTHER_TAG, SELF_TAG, Speaker};

    pub use crate::parsing::{DEFAULT_TIME_FORMAT, parse_line};

    pub use crate::core::{
        INVALID_SEQUENCES, ProcessingStats, has_invalid_sequence, parse_chat, parse_chat_str,
        split_in_sessions, to_text, write_text,
    };

    pub use crate::corpus::{CorpusReport, build_corpus, get_dir_files, run};

    pub use crate::model::{LanguageModel, generate, train};
}
