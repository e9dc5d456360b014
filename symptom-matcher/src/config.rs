use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{MatcherError, MatcherResult};
use crate::ranker::{
    DEFAULT_CONFIDENCE_FLOOR, DEFAULT_MAX_PREDICTIONS, DEFAULT_MIN_FALLBACK_SYMPTOMS,
    DEFAULT_TOP_CANDIDATES,
};
use crate::scorer::{DEFAULT_MATCH_THRESHOLD, DEFAULT_SHORT_SYMPTOM_LEN};

/// Fallback classifier configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClassifierConfig {
    /// No classifier; weak queries get heuristic results only
    Disabled,
    /// Text-classification inference endpoint over HTTP
    Http {
        api_url: String,
        api_key: Option<String>,
        /// One label per line; resolves `LABEL_<n>` answers
        labels_path: Option<PathBuf>,
    },
}

/// Symptom matcher configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatcherConfig {
    pub match_threshold: u8,
    pub short_symptom_len: usize,
    pub top_candidates: usize,
    pub max_predictions: usize,
    pub confidence_floor: f64,
    pub min_fallback_symptoms: usize,
    /// Maximum cached queries; 0 disables the cache
    pub cache_capacity: u64,
    /// 0 waits for the classifier indefinitely
    pub fallback_timeout_ms: u64,
    pub classifier: ClassifierConfig,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            short_symptom_len: DEFAULT_SHORT_SYMPTOM_LEN,
            top_candidates: DEFAULT_TOP_CANDIDATES,
            max_predictions: DEFAULT_MAX_PREDICTIONS,
            confidence_floor: DEFAULT_CONFIDENCE_FLOOR,
            min_fallback_symptoms: DEFAULT_MIN_FALLBACK_SYMPTOMS,
            cache_capacity: 1024,
            fallback_timeout_ms: 10_000,
            classifier: ClassifierConfig::Disabled,
        }
    }
}

impl MatcherConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> MatcherResult<Self> {
        let defaults = Self::default();

        let classifier = match std::env::var("MEDCON_CLASSIFIER") {
            Ok(kind) => match kind.to_lowercase().as_str() {
                "disabled" | "none" | "" => ClassifierConfig::Disabled,
                "http" => ClassifierConfig::Http {
                    api_url: std::env::var("MEDCON_CLASSIFIER_URL").map_err(|_| {
                        MatcherError::Config(
                            "MEDCON_CLASSIFIER_URL is required for the http classifier".to_string(),
                        )
                    })?,
                    api_key: std::env::var("MEDCON_CLASSIFIER_API_KEY").ok(),
                    labels_path: std::env::var("MEDCON_CLASSIFIER_LABELS").ok().map(PathBuf::from),
                },
                other => {
                    return Err(MatcherError::Config(format!(
                        "Unknown classifier: {}",
                        other
                    )))
                }
            },
            Err(_) => defaults.classifier,
        };

        let config = Self {
            match_threshold: env_or("MEDCON_MATCH_THRESHOLD", defaults.match_threshold)?,
            short_symptom_len: env_or("MEDCON_SHORT_SYMPTOM_LEN", defaults.short_symptom_len)?,
            top_candidates: env_or("MEDCON_TOP_CANDIDATES", defaults.top_candidates)?,
            max_predictions: env_or("MEDCON_MAX_PREDICTIONS", defaults.max_predictions)?,
            confidence_floor: env_or("MEDCON_CONFIDENCE_FLOOR", defaults.confidence_floor)?,
            min_fallback_symptoms: env_or(
                "MEDCON_MIN_FALLBACK_SYMPTOMS",
                defaults.min_fallback_symptoms,
            )?,
            cache_capacity: env_or("MEDCON_CACHE_CAPACITY", defaults.cache_capacity)?,
            fallback_timeout_ms: env_or("MEDCON_FALLBACK_TIMEOUT_MS", defaults.fallback_timeout_ms)?,
            classifier,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MatcherResult<()> {
        if self.match_threshold > 100 {
            return Err(MatcherError::Config(format!(
                "match_threshold must be within 0..=100, got {}",
                self.match_threshold
            )));
        }
        if !(0.0..=100.0).contains(&self.confidence_floor) {
            return Err(MatcherError::Config(format!(
                "confidence_floor must be within 0..=100, got {}",
                self.confidence_floor
            )));
        }
        if self.max_predictions == 0 || self.max_predictions > self.top_candidates {
            return Err(MatcherError::Config(format!(
                "max_predictions must be between 1 and top_candidates ({}), got {}",
                self.top_candidates, self.max_predictions
            )));
        }
        Ok(())
    }

    pub fn fallback_timeout(&self) -> Option<Duration> {
        (self.fallback_timeout_ms > 0).then(|| Duration::from_millis(self.fallback_timeout_ms))
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> MatcherResult<T> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| MatcherError::Config(format!("Invalid value for {}: '{}'", name, value))),
        Err(_) => Ok(default),
    }
}
