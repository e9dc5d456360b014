pub mod disabled;
pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::error::MatcherResult;

pub use disabled::DisabledClassifier;
pub use http::HttpClassifier;

/// Answer of a fallback classifier
///
/// Classifiers never error: anything that goes wrong is reported as
/// `Unavailable` and the matcher continues with heuristic results only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum ClassifierOutcome {
    Label(String),
    Unavailable(String),
}

/// Trait for trained text classifiers proposing one disease label
#[async_trait]
pub trait FallbackClassifier: Send + Sync {
    /// Classify space-joined symptoms into a single disease label
    async fn classify(&self, text: &str) -> ClassifierOutcome;

    /// Name shown in health reports and logs
    fn name(&self) -> &str;

    /// Whether a model is behind this classifier at all
    fn is_available(&self) -> bool {
        true
    }
}

/// Create a classifier instance based on configuration
pub fn create_classifier(config: &ClassifierConfig) -> MatcherResult<Box<dyn FallbackClassifier>> {
    match config {
        ClassifierConfig::Disabled => Ok(Box::new(DisabledClassifier)),
        ClassifierConfig::Http { .. } => Ok(Box::new(HttpClassifier::new(config)?)),
    }
}
