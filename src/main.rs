//! # chatcorpus CLI
//!
//! Builds `dataset.txt` from a directory of WhatsApp exports.

use std::io::{self, IsTerminal};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chatcorpus::CorpusError;
use chatcorpus::cli::Args;
use chatcorpus::config::CorpusConfig;
use chatcorpus::corpus;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "debug,chatcorpus=debug"
    } else {
        "info,chatcorpus=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), CorpusError> {
    let start = Instant::now();
    let config = CorpusConfig::from(args);

    info!(
        user = %config.user_name,
        input = %config.chats_path.display(),
        output = %config.output_path.display(),
        "chatcorpus v{}",
        env!("CARGO_PKG_VERSION")
    );
    if let Some(token) = config.session_token() {
        info!(
            "Splitting sessions with {:?} after {}h of silence",
            token, config.delta_h_threshold
        );
    }

    let report = corpus::run(&config)?;
    let stats = report.stats;

    info!(
        files = report.files.len(),
        read = stats.lines_read,
        kept = stats.lines_kept,
        unparsed = stats.unparsed,
        invalid = stats.invalid_sequences,
        bad_timestamps = stats.timestamp_errors,
        sessions = stats.session_tokens,
        "Done in {:.2}s ({:.1}% of lines kept)",
        start.elapsed().as_secs_f64(),
        stats.retention_ratio()
    );

    Ok(())
}
