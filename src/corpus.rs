//! Directory-level corpus building.
//!
//! [`run`] is the whole pipeline: discover exports, process each one in
//! directory-listing order, then write `dataset.txt` once at the end. A
//! fatal error anywhere before the write leaves the output untouched.
//!
//! ```rust,no_run
//! use chatcorpus::config::CorpusConfig;
//! use chatcorpus::corpus::run;
//!
//! let config = CorpusConfig::new("Bot")
//!     .with_chats_path("data/raw")
//!     .with_output_path("data/parsed")
//!     .with_session_token("<|endoftext|>");
//!
//! let report = run(&config)?;
//! println!("{} lines from {} files", report.line_count, report.files.len());
//! # Ok::<(), chatcorpus::CorpusError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::CorpusConfig;
use crate::core::output::write_text;
use crate::core::processor::{ProcessingStats, parse_chat_with_stats};
use crate::error::{CorpusError, Result};

/// Summary of a corpus build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusReport {
    /// Export files processed, in processing order
    pub files: Vec<PathBuf>,
    /// Counters summed over all files
    pub stats: ProcessingStats,
    /// Lines in the corpus, session tokens included
    pub line_count: usize,
    /// Where the corpus was written, once written
    pub output: Option<PathBuf>,
}

/// Lists regular files in `dir_path` whose name ends with `extension`.
///
/// Returns `(file_name, full_path)` pairs in directory-listing order. An
/// empty `extension` matches every file.
pub fn get_dir_files(
    dir_path: impl AsRef<Path>,
    extension: &str,
) -> Result<Vec<(String, PathBuf)>> {
    let dir = dir_path.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| CorpusError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CorpusError::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(extension) {
            continue;
        }
        let file_type = entry.file_type().map_err(|e| CorpusError::io(entry.path(), e))?;
        if file_type.is_dir() {
            continue;
        }
        files.push((name, entry.path()));
    }
    Ok(files)
}

/// Processes every export in the configured directory without writing.
pub fn build_corpus(config: &CorpusConfig) -> Result<(Vec<String>, CorpusReport)> {
    config.validate()?;

    let files = get_dir_files(&config.chats_path, &config.extension)?;
    let names: Vec<&str> = files.iter().map(|(name, _)| name.as_str()).collect();
    info!(
        "Found {} txt files in `{}` folder: {:?}",
        files.len(),
        config.chats_path.display(),
        names
    );

    let mut data: Vec<String> = Vec::new();
    let mut report = CorpusReport::default();

    for (_, path) in files {
        let (lines, stats) = parse_chat_with_stats(&path, config)?;
        data.extend(lines);
        report.stats.merge(&stats);
        report.files.push(path);
    }

    report.line_count = data.len();
    Ok((data, report))
}

/// Builds the corpus and writes it to `<output_path>/dataset.txt`.
pub fn run(config: &CorpusConfig) -> Result<CorpusReport> {
    let (data, mut report) = build_corpus(config)?;

    let dataset_path = config.dataset_path();
    write_text(&data, &dataset_path)?;
    report.output = Some(dataset_path);

    Ok(report)
}
