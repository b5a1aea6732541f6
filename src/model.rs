//! GPT-2 fine-tuning and sampling behind a narrow interface.
//!
//! The heavy lifting (weights download, training loop, sampling) lives in an
//! external backend. This module only fixes the contract and the
//! orchestration around it, so corpus building and training can be tested
//! without a real model.
//!
//! ```rust
//! use std::path::Path;
//! use chatcorpus::config::TrainingConfig;
//! use chatcorpus::model::{FineTuneRequest, GenerateRequest, LanguageModel, train_at};
//! use chrono::NaiveDate;
//!
//! struct Echo;
//!
//! impl LanguageModel for Echo {
//!     fn name(&self) -> &'static str { "echo" }
//!     fn download(&mut self, _dir: &Path, _name: &str) -> chatcorpus::Result<()> { Ok(()) }
//!     fn fine_tune(&mut self, _req: &FineTuneRequest<'_>) -> chatcorpus::Result<()> { Ok(()) }
//!     fn generate(&mut self, req: &GenerateRequest<'_>) -> chatcorpus::Result<String> {
//!         Ok(req.prefix.to_string())
//!     }
//! }
//!
//! let started = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap();
//! let run_name = train_at(&mut Echo, &TrainingConfig::new(), started)?;
//! assert_eq!(run_name, "GPT2-Simple-124M-20200102_030405");
//! # Ok::<(), chatcorpus::CorpusError>(())
//! ```

use std::path::Path;

use chrono::{NaiveDateTime, Utc};
use tracing::info;

use crate::config::TrainingConfig;
use crate::error::{CorpusError, Result};

/// A fine-tuning run handed to the backend.
#[derive(Debug, Clone, Copy)]
pub struct FineTuneRequest<'a> {
    pub config: &'a TrainingConfig,
    pub run_name: &'a str,
}

/// A sampling request handed to the backend.
#[derive(Debug, Clone, Copy)]
pub struct GenerateRequest<'a> {
    pub model_dir: &'a Path,
    pub model_name: &'a str,
    /// Fine-tuned run to load; the backend's default when `None`
    pub run_name: Option<&'a str>,
    /// Text the sample continues from
    pub prefix: &'a str,
    pub temperature: f64,
}

/// An external GPT-2 backend.
pub trait LanguageModel {
    /// Returns the backend name, for logs.
    fn name(&self) -> &'static str;

    /// Fetches pretrained weights for `model_name` into `model_dir`.
    fn download(&mut self, model_dir: &Path, model_name: &str) -> Result<()>;

    /// Fine-tunes on the configured dataset.
    fn fine_tune(&mut self, request: &FineTuneRequest<'_>) -> Result<()>;

    /// Samples one text.
    fn generate(&mut self, request: &GenerateRequest<'_>) -> Result<String>;
}

/// Run name derived from the model size and the start time (UTC).
pub fn run_name_for(model_name: &str, started_at: NaiveDateTime) -> String {
    format!(
        "GPT2-Simple-{}-{}",
        model_name,
        started_at.format("%Y%m%d_%H%M%S")
    )
}

/// Downloads the base model and fine-tunes it, returning the run name.
pub fn train_at(
    model: &mut dyn LanguageModel,
    config: &TrainingConfig,
    started_at: NaiveDateTime,
) -> Result<String> {
    config.validate()?;

    let run_name = config
        .run_name
        .clone()
        .unwrap_or_else(|| run_name_for(&config.model_name, started_at));

    info!(
        backend = model.name(),
        model = %config.model_name,
        "Downloading base model into {}",
        config.model_dir.display()
    );
    model.download(&config.model_dir, &config.model_name)?;

    info!(
        backend = model.name(),
        run = %run_name,
        steps = config.steps,
        "Fine-tuning on {}",
        config.dataset.display()
    );
    model.fine_tune(&FineTuneRequest {
        config,
        run_name: &run_name,
    })?;

    Ok(run_name)
}

/// [`train_at`] stamped with the current UTC time.
pub fn train(model: &mut dyn LanguageModel, config: &TrainingConfig) -> Result<String> {
    train_at(model, config, Utc::now().naive_utc())
}

/// Samples a continuation of `prompt` from the configured model.
pub fn generate(
    model: &mut dyn LanguageModel,
    config: &TrainingConfig,
    prompt: &str,
    temperature: f64,
) -> Result<String> {
    if !temperature.is_finite() || temperature <= 0.0 {
        return Err(CorpusError::invalid_config(
            "temperature",
            format!("must be a positive number, got {temperature}"),
        ));
    }

    model.generate(&GenerateRequest {
        model_dir: &config.model_dir,
        model_name: &config.model_name,
        run_name: config.run_name.as_deref(),
        prefix: prompt,
        temperature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    #[derive(Debug, PartialEq)]
    enum Call {
        Download(PathBuf, String),
        FineTune {
            run_name: String,
            steps: u32,
        },
        Generate {
            prefix: String,
            temperature: f64,
            run_name: Option<String>,
        },
    }

    #[derive(Default)]
    struct FakeModel {
        calls: Vec<Call>,
        fail_download: bool,
    }

    impl LanguageModel for FakeModel {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn download(&mut self, model_dir: &Path, model_name: &str) -> Result<()> {
            if self.fail_download {
                return Err(CorpusError::model("network unreachable"));
            }
            self.calls
                .push(Call::Download(model_dir.to_path_buf(), model_name.to_string()));
            Ok(())
        }

        fn fine_tune(&mut self, request: &FineTuneRequest<'_>) -> Result<()> {
            self.calls.push(Call::FineTune {
                run_name: request.run_name.to_string(),
                steps: request.config.steps,
            });
            Ok(())
        }

        fn generate(&mut self, request: &GenerateRequest<'_>) -> Result<String> {
            self.calls.push(Call::Generate {
                prefix: request.prefix.to_string(),
                temperature: request.temperature,
                run_name: request.run_name.map(str::to_string),
            });
            Ok(format!("{} [Bot] sure", request.prefix))
        }
    }

    fn started() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 7, 9)
            .unwrap()
            .and_hms_opt(18, 5, 42)
            .unwrap()
    }

    #[test]
    fn test_run_name_format() {
        assert_eq!(
            run_name_for("124M", started()),
            "GPT2-Simple-124M-20210709_180542"
        );
    }

    #[test]
    fn test_train_downloads_then_fine_tunes() {
        let mut model = FakeModel::default();
        let config = TrainingConfig::new().with_steps(10);

        let run_name = train_at(&mut model, &config, started()).unwrap();

        assert_eq!(run_name, "GPT2-Simple-124M-20210709_180542");
        assert_eq!(
            model.calls,
            vec![
                Call::Download(PathBuf::from("./models/trained/"), "124M".to_string()),
                Call::FineTune {
                    run_name: run_name.clone(),
                    steps: 10
                },
            ]
        );
    }

    #[test]
    fn test_train_uses_explicit_run_name() {
        let mut model = FakeModel::default();
        let config = TrainingConfig::new().with_run_name("my-run");
        assert_eq!(train_at(&mut model, &config, started()).unwrap(), "my-run");
    }

    #[test]
    fn test_train_stops_on_download_failure() {
        let mut model = FakeModel {
            fail_download: true,
            ..FakeModel::default()
        };
        let err = train(&mut model, &TrainingConfig::new()).unwrap_err();
        assert!(matches!(err, CorpusError::Model(_)));
        assert!(model.calls.is_empty());
    }

    #[test]
    fn test_train_rejects_invalid_config() {
        let mut model = FakeModel::default();
        let err = train(&mut model, &TrainingConfig::new().with_steps(0)).unwrap_err();
        assert!(err.is_invalid_config());
        assert!(model.calls.is_empty());
    }

    #[test]
    fn test_generate_passes_prompt_and_temperature() {
        let mut model = FakeModel::default();
        let config = TrainingConfig::new().with_run_name("run1");

        let text = generate(&mut model, &config, "[Human] hi", 0.7).unwrap();

        assert_eq!(text, "[Human] hi [Bot] sure");
        assert_eq!(
            model.calls,
            vec![Call::Generate {
                prefix: "[Human] hi".to_string(),
                temperature: 0.7,
                run_name: Some("run1".to_string()),
            }]
        );
    }

    #[test]
    fn test_generate_rejects_bad_temperature() {
        let mut model = FakeModel::default();
        let config = TrainingConfig::new();
        for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(generate(&mut model, &config, "x", t).is_err());
        }
        assert!(model.calls.is_empty());
    }
}
