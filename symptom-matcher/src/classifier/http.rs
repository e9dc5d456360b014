//! HTTP text-classification provider
//!
//! Talks to an inference server hosting the fine-tuned sequence classifier.
//! The request body is `{"inputs": "<symptoms>"}`; the server may answer
//! with a single `{"label": ...}` object, a list of label scores, or a
//! batch of such lists. Input truncation is the server's business.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::classifier::{ClassifierOutcome, FallbackClassifier};
use crate::config::ClassifierConfig;
use crate::error::{MatcherError, MatcherResult};

#[derive(Debug, Clone, Deserialize)]
struct LabelScore {
    label: String,
    #[serde(default)]
    score: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Single { label: String },
    Scores(Vec<LabelScore>),
    Batched(Vec<Vec<LabelScore>>),
}

impl InferenceResponse {
    fn best_label(self) -> Option<String> {
        let scores = match self {
            InferenceResponse::Single { label } => return Some(label),
            InferenceResponse::Scores(scores) => scores,
            InferenceResponse::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
        };
        scores
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .map(|best| best.label)
    }
}

pub struct HttpClassifier {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    labels: Vec<String>,
}

impl HttpClassifier {
    pub fn new(config: &ClassifierConfig) -> MatcherResult<Self> {
        let ClassifierConfig::Http {
            api_url,
            api_key,
            labels_path,
        } = config
        else {
            return Err(MatcherError::Config(
                "HttpClassifier requires an http classifier configuration".to_string(),
            ));
        };

        let labels = match labels_path {
            Some(path) => std::fs::read_to_string(path)
                .map_err(|e| {
                    MatcherError::Config(format!("Cannot read label list {}: {}", path.display(), e))
                })?
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };

        Ok(Self {
            client: reqwest::Client::new(),
            api_url: api_url.clone(),
            api_key: api_key.clone(),
            labels,
        })
    }

    async fn request_label(&self, text: &str) -> MatcherResult<String> {
        let mut request = self.client.post(&self.api_url).json(&json!({ "inputs": text }));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MatcherError::Classifier(format!(
                "inference endpoint returned {}",
                status
            )));
        }

        let body: InferenceResponse = response.json().await?;
        let raw = body
            .best_label()
            .ok_or_else(|| MatcherError::Classifier("inference response had no label".to_string()))?;
        self.resolve_label(&raw)
    }

    /// Map `LABEL_<n>` through the label list, the way a label encoder would
    fn resolve_label(&self, raw: &str) -> MatcherResult<String> {
        if self.labels.is_empty() {
            return Ok(raw.to_string());
        }
        match raw.strip_prefix("LABEL_").and_then(|n| n.parse::<usize>().ok()) {
            Some(index) => self.labels.get(index).cloned().ok_or_else(|| {
                MatcherError::Classifier(format!(
                    "label index {} outside label list of {}",
                    index,
                    self.labels.len()
                ))
            }),
            None => Ok(raw.to_string()),
        }
    }
}

#[async_trait]
impl FallbackClassifier for HttpClassifier {
    async fn classify(&self, text: &str) -> ClassifierOutcome {
        match self.request_label(text).await {
            Ok(label) if !label.trim().is_empty() => {
                debug!(label = %label, "Fallback classifier answered");
                ClassifierOutcome::Label(label.trim().to_string())
            }
            Ok(_) => ClassifierOutcome::Unavailable("classifier returned an empty label".to_string()),
            Err(e) => ClassifierOutcome::Unavailable(e.to_string()),
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}
