//! Configuration types for corpus building and model training.
//!
//! These are plain structs with builder setters and serde derives, usable
//! from library code without pulling in the CLI.
//!
//! - [`CorpusConfig`] - where chats are read from, who "self" is, session splitting
//! - [`TrainingConfig`] - fine-tuning parameters handed to a [`LanguageModel`](crate::model::LanguageModel)
//!
//! # Example
//!
//! ```rust
//! use chatcorpus::config::CorpusConfig;
//!
//! let config = CorpusConfig::new("Bot")
//!     .with_chats_path("data/raw")
//!     .with_session_token("<|endoftext|>")
//!     .with_delta_h_threshold(6);
//!
//! assert!(config.validate().is_ok());
//! assert!(config.dataset_path().ends_with("dataset.txt"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, Result};
use crate::parsing::DEFAULT_TIME_FORMAT;

/// File name of the corpus written inside the output directory.
pub const DATASET_FILE_NAME: &str = "dataset.txt";

/// Configuration for building a corpus from a directory of chat exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Export name of the user whose lines get the self tag (required)
    pub user_name: String,

    /// Directory holding the raw exports (default: `../data/raw/`)
    pub chats_path: PathBuf,

    /// Directory receiving `dataset.txt` (default: `../data/parsed/`)
    pub output_path: PathBuf,

    /// Marker line inserted at file starts and after long gaps (default: none)
    pub session_token: Option<String>,

    /// Gap in whole hours that opens a new session (default: 4)
    pub delta_h_threshold: i64,

    /// chrono format for `"<date>, <time>"` (default: `%m/%d/%y, %H:%M`)
    pub time_format: String,

    /// File name suffix of exports to pick up (default: `.txt`)
    pub extension: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            chats_path: PathBuf::from("../data/raw/"),
            output_path: PathBuf::from("../data/parsed/"),
            session_token: None,
            delta_h_threshold: 4,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            extension: ".txt".to_string(),
        }
    }
}

impl CorpusConfig {
    /// Creates a configuration with defaults for everything but the user name.
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            ..Self::default()
        }
    }

    /// Sets the input directory.
    #[must_use]
    pub fn with_chats_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chats_path = path.into();
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Enables session splitting with the given marker.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Sets the session gap threshold in hours.
    #[must_use]
    pub fn with_delta_h_threshold(mut self, hours: i64) -> Self {
        self.delta_h_threshold = hours;
        self
    }

    /// Sets the datetime format.
    #[must_use]
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    /// Sets the export file suffix.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Returns the session token, treating an empty string as unset.
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Full path of the corpus file.
    pub fn dataset_path(&self) -> PathBuf {
        self.output_path.join(DATASET_FILE_NAME)
    }

    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.user_name.is_empty() {
            return Err(CorpusError::invalid_config("user_name", "must not be empty"));
        }
        if self.delta_h_threshold < 0 {
            return Err(CorpusError::invalid_config(
                "delta_h_threshold",
                format!("must be >= 0, got {}", self.delta_h_threshold),
            ));
        }
        if self.time_format.is_empty() {
            return Err(CorpusError::invalid_config("time_format", "must not be empty"));
        }
        Ok(())
    }
}

/// Which checkpoint fine-tuning resumes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestoreFrom {
    /// Continue from the latest checkpoint of the run, if any
    #[default]
    Latest,
    /// Start from the pretrained base model
    Fresh,
}

impl RestoreFrom {
    pub fn as_str(self) -> &'static str {
        match self {
            RestoreFrom::Latest => "latest",
            RestoreFrom::Fresh => "fresh",
        }
    }
}

/// Fine-tuning parameters.
///
/// Defaults reproduce the stock GPT-2 124M recipe used for chat corpora.
/// Can be loaded from a JSON file; missing keys fall back to defaults.
///
/// ```rust
/// use chatcorpus::config::TrainingConfig;
///
/// let config = TrainingConfig::new()
///     .with_dataset("../data/parsed/dataset.txt")
///     .with_steps(500);
/// assert_eq!(config.model_name, "124M");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Where pretrained models are downloaded (default: `./models/trained/`)
    pub model_dir: PathBuf,

    /// Pretrained model size (default: `124M`)
    pub model_name: String,

    /// Corpus file to fine-tune on
    pub dataset: PathBuf,

    /// Optimizer learning rate (default: 0.0001)
    pub learning_rate: f64,

    /// Training steps (default: 1500)
    pub steps: u32,

    /// Log loss every N steps (default: 1)
    pub print_every: u32,

    /// Sample text every N steps (default: 300)
    pub sample_every: u32,

    /// Checkpoint every N steps (default: 300)
    pub save_every: u32,

    /// Checkpoint to resume from (default: latest)
    pub restore_from: RestoreFrom,

    /// Run name; generated from the model name and start time when unset
    pub run_name: Option<String>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("./models/trained/"),
            model_name: "124M".to_string(),
            dataset: PathBuf::new(),
            learning_rate: 0.0001,
            steps: 1500,
            print_every: 1,
            sample_every: 300,
            save_every: 300,
            restore_from: RestoreFrom::Latest,
            run_name: None,
        }
    }
}

impl TrainingConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_model_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.model_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = name.into();
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: impl Into<PathBuf>) -> Self {
        self.dataset = dataset.into();
        self
    }

    #[must_use]
    pub fn with_learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    #[must_use]
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    #[must_use]
    pub fn with_restore_from(mut self, restore_from: RestoreFrom) -> Self {
        self.restore_from = restore_from;
        self
    }

    #[must_use]
    pub fn with_run_name(mut self, name: impl Into<String>) -> Self {
        self.run_name = Some(name.into());
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.model_name.is_empty() {
            return Err(CorpusError::invalid_config("model_name", "must not be empty"));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(CorpusError::invalid_config(
                "learning_rate",
                format!("must be a positive number, got {}", self.learning_rate),
            ));
        }
        if self.steps == 0 {
            return Err(CorpusError::invalid_config("steps", "must be at least 1"));
        }
        for (field, value) in [
            ("print_every", self.print_every),
            ("sample_every", self.sample_every),
            ("save_every", self.save_every),
        ] {
            if value == 0 {
                return Err(CorpusError::invalid_config(field, "must be at least 1"));
            }
        }
        Ok(())
    }
}
