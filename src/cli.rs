//! Command-line interface definition using clap.
//!
//! [`Args`] mirrors [`CorpusConfig`] one flag per field and converts into it.
//! Flags are spelled in kebab-case; the snake_case spellings
//! (`--user_name`, `--chats_path`, ...) are accepted as aliases.

use std::path::PathBuf;

use clap::Parser;

use crate::config::CorpusConfig;
use crate::parsing::DEFAULT_TIME_FORMAT;

/// Build a speaker-tagged GPT-2 training corpus from WhatsApp chat exports.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatcorpus")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatcorpus --user-name \"Jane Doe\"
    chatcorpus --user-name Jane --chats-path chats/ --output-path out/
    chatcorpus --user-name Jane --session-token '<|endoftext|>' --delta-h-threshold 6
    chatcorpus --user-name Jane --time-format '%d/%m/%Y, %H:%M' -v")]
pub struct Args {
    /// WhatsApp name of the user, as it appears in the raw exports
    #[arg(long, alias = "user_name", value_name = "NAME")]
    pub user_name: String,

    /// Directory containing the raw .txt exports
    #[arg(long, alias = "chats_path", value_name = "DIR", default_value = "../data/raw/")]
    pub chats_path: PathBuf,

    /// Directory where dataset.txt is written
    #[arg(long, alias = "output_path", value_name = "DIR", default_value = "../data/parsed/")]
    pub output_path: PathBuf,

    /// Insert this line at the start of each chat and after
    /// `delta-h-threshold` hours of silence, splitting chats into sessions
    #[arg(long, alias = "session_token", value_name = "TOKEN")]
    pub session_token: Option<String>,

    /// Hours between two messages before a session token is inserted
    #[arg(long, alias = "delta_h_threshold", value_name = "HOURS", default_value_t = 4)]
    pub delta_h_threshold: i64,

    /// chrono format of the "<date>, <time>" prefix of each line
    #[arg(long, alias = "time_format", value_name = "FORMAT", default_value = DEFAULT_TIME_FORMAT)]
    pub time_format: String,

    /// Increase output verbosity
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Args> for CorpusConfig {
    fn from(args: &Args) -> Self {
        CorpusConfig {
            user_name: args.user_name.clone(),
            chats_path: args.chats_path.clone(),
            output_path: args.output_path.clone(),
            session_token: args.session_token.clone(),
            delta_h_threshold: args.delta_h_threshold,
            time_format: args.time_format.clone(),
            ..CorpusConfig::default()
        }
    }
}
