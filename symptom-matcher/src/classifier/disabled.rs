use async_trait::async_trait;

use crate::classifier::{ClassifierOutcome, FallbackClassifier};

/// Stand-in used when no model is deployed
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledClassifier;

#[async_trait]
impl FallbackClassifier for DisabledClassifier {
    async fn classify(&self, _text: &str) -> ClassifierOutcome {
        ClassifierOutcome::Unavailable("fallback classifier disabled".to_string())
    }

    fn name(&self) -> &str {
        "disabled"
    }

    fn is_available(&self) -> bool {
        false
    }
}
