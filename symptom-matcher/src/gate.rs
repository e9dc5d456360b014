use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::classifier::{ClassifierOutcome, FallbackClassifier};

/// Bounds a fallback classifier call in time
///
/// A call that outlives the timeout is reported as `Unavailable`, the same
/// as any other classifier failure.
#[derive(Clone)]
pub struct FallbackGate {
    classifier: Arc<dyn FallbackClassifier>,
    timeout: Option<Duration>,
}

impl FallbackGate {
    pub fn new(classifier: Arc<dyn FallbackClassifier>, timeout: Option<Duration>) -> Self {
        Self {
            classifier,
            timeout,
        }
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    pub fn is_available(&self) -> bool {
        self.classifier.is_available()
    }

    pub async fn classify(&self, text: &str) -> ClassifierOutcome {
        if !self.classifier.is_available() {
            return ClassifierOutcome::Unavailable(format!(
                "classifier '{}' has no model loaded",
                self.classifier.name()
            ));
        }

        let Some(limit) = self.timeout else {
            return self.classifier.classify(text).await;
        };

        match tokio::time::timeout(limit, self.classifier.classify(text)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(
                    classifier = %self.classifier.name(),
                    timeout_ms = limit.as_millis() as u64,
                    "Fallback classifier timed out"
                );
                ClassifierOutcome::Unavailable(format!(
                    "classifier timed out after {} ms",
                    limit.as_millis()
                ))
            }
        }
    }
}
