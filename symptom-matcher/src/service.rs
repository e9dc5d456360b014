use logger_redacted::PiiRedactor;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::cache::PredictionCache;
use crate::classifier::{create_classifier, ClassifierOutcome, FallbackClassifier};
use crate::config::MatcherConfig;
use crate::dataset::{DatasetProvider, DiseaseTable};
use crate::error::MatcherResult;
use crate::gate::FallbackGate;
use crate::prediction::{HealthStatus, Prediction, PredictionResponse, SymptomRequest};
use crate::query::SymptomQuery;
use crate::ranker::Ranker;
use crate::scorer::SymptomScorer;

/// Disease detection from user-reported symptoms
pub struct DiseaseDetectionService {
    config: MatcherConfig,
    table: Arc<DiseaseTable>,
    scorer: SymptomScorer,
    ranker: Ranker,
    gate: FallbackGate,
    cache: PredictionCache,
    redactor: PiiRedactor,
}

impl DiseaseDetectionService {
    /// Load the disease table and build the configured classifier
    pub fn new(config: MatcherConfig, provider: &dyn DatasetProvider) -> MatcherResult<Self> {
        let table = Arc::new(DiseaseTable::load(provider)?);
        let classifier: Arc<dyn FallbackClassifier> = Arc::from(create_classifier(&config.classifier)?);
        Self::with_classifier(config, table, classifier)
    }

    /// Assemble a service from an already loaded table and classifier
    pub fn with_classifier(
        config: MatcherConfig,
        table: Arc<DiseaseTable>,
        classifier: Arc<dyn FallbackClassifier>,
    ) -> MatcherResult<Self> {
        config.validate()?;

        info!(
            classifier = %classifier.name(),
            diseases = table.len(),
            cache_capacity = config.cache_capacity,
            fallback_timeout_ms = config.fallback_timeout_ms,
            "Disease detection service ready"
        );

        Ok(Self {
            scorer: SymptomScorer::new(config.match_threshold, config.short_symptom_len),
            ranker: Ranker::new(
                config.top_candidates,
                config.max_predictions,
                config.confidence_floor,
                config.min_fallback_symptoms,
            ),
            gate: FallbackGate::new(classifier, config.fallback_timeout()),
            cache: PredictionCache::new(config.cache_capacity),
            redactor: PiiRedactor::default(),
            table,
            config,
        })
    }

    /// Predict diseases for a list of raw symptoms
    ///
    /// Heuristic predictions come best first. When they are weak and the
    /// query holds enough symptoms, the fallback classifier may prepend one
    /// fixed-confidence prediction for a disease not already listed.
    pub async fn predict<S: AsRef<str>>(&self, symptoms: &[S]) -> MatcherResult<Vec<Prediction>> {
        let query = SymptomQuery::parse(symptoms)?;
        let query_hash = self.redactor.correlation_hash(query.symptoms());

        if let Some(cached) = self.cache.get(&query).await {
            debug!(query_hash = %query_hash, "Prediction cache hit");
            return Ok(cached.as_ref().clone());
        }

        let candidates = self.scorer.score_all(&query, &self.table);
        let heuristic = self.ranker.select(candidates);
        let needs_fallback = self.ranker.needs_fallback(&heuristic, query.len());
        let mut predictions: Vec<Prediction> = heuristic.into_iter().map(Prediction::heuristic).collect();

        debug!(
            query_hash = %query_hash,
            symptoms = query.len(),
            heuristic = predictions.len(),
            top_confidence = predictions.first().map_or(0.0, |p| p.confidence),
            needs_fallback,
            "Heuristic scoring done"
        );

        let mut cacheable = true;
        if needs_fallback {
            match self.gate.classify(&query.joined()).await {
                ClassifierOutcome::Label(label) => self.merge_fallback(&query, label.trim(), &mut predictions),
                ClassifierOutcome::Unavailable(reason) if self.gate.is_available() => {
                    warn!(
                        query_hash = %query_hash,
                        classifier = %self.gate.classifier_name(),
                        reason = %self.redactor.redact(&reason),
                        "Fallback classifier unavailable, returning heuristic results only"
                    );
                    cacheable = false;
                }
                ClassifierOutcome::Unavailable(_) => {
                    debug!(query_hash = %query_hash, "No fallback classifier configured");
                }
            }
        }

        info!(
            query_hash = %query_hash,
            predictions = predictions.len(),
            fallback_consulted = needs_fallback,
            "Prediction complete"
        );

        if cacheable {
            self.cache.insert(&query, predictions.clone()).await;
        }
        Ok(predictions)
    }

    fn merge_fallback(&self, query: &SymptomQuery, label: &str, predictions: &mut Vec<Prediction>) {
        let profile = self.table.get(label);
        let disease = profile.map_or(label, |p| p.name.as_str());

        if predictions.iter().any(|p| p.disease == disease) {
            debug!(disease = %disease, "Fallback disease already predicted, discarded");
            return;
        }

        let matched = profile
            .map(|p| self.scorer.matched_symptoms(query, p))
            .unwrap_or_default();
        if profile.is_none() {
            debug!(label = %label, "Fallback label not in disease table");
        }
        predictions.insert(0, Prediction::fallback(label, profile, matched));
    }

    /// Request-boundary form of [`Self::predict`]
    pub async fn predict_request(&self, request: &SymptomRequest) -> MatcherResult<PredictionResponse> {
        let predictions = self.predict(request.symptoms.as_slice()).await?;
        Ok(PredictionResponse::new(predictions))
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            models_loaded: self.gate.is_available(),
            classifier: self.gate.classifier_name().to_string(),
            diseases_loaded: self.table.len(),
        }
    }

    /// Disease names in dataset order
    pub fn diseases(&self) -> Vec<String> {
        self.table.names().map(str::to_string).collect()
    }

    pub fn table(&self) -> &Arc<DiseaseTable> {
        &self.table
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{RawDiseaseRecord, StaticDatasetProvider};

    fn provider() -> StaticDatasetProvider {
        StaticDatasetProvider::new(vec![
            RawDiseaseRecord::new("Flu", "fever,cough,fatigue", "rest,fluids"),
            RawDiseaseRecord::new("Migraine", "headache,nausea", ""),
        ])
    }

    #[tokio::test]
    async fn test_new_with_disabled_classifier() {
        let service = DiseaseDetectionService::new(MatcherConfig::default(), &provider()).unwrap();
        let health = service.health();
        assert_eq!(health.status, "healthy");
        assert!(!health.models_loaded);
        assert_eq!(health.classifier, "disabled");
        assert_eq!(health.diseases_loaded, 2);
        assert_eq!(service.diseases(), vec!["Flu", "Migraine"]);
    }

    #[tokio::test]
    async fn test_invalid_config_rejected() {
        let config = MatcherConfig {
            max_predictions: 0,
            ..Default::default()
        };
        assert!(DiseaseDetectionService::new(config, &provider()).is_err());
    }

    #[tokio::test]
    async fn test_predict_request_wraps_message() {
        let service = DiseaseDetectionService::new(MatcherConfig::default(), &provider()).unwrap();
        let response = service
            .predict_request(&SymptomRequest {
                symptoms: vec!["fever".into(), "cough".into()],
            })
            .await
            .unwrap();
        assert_eq!(response.predictions[0].disease, "Flu");
        assert_eq!(response.message, crate::prediction::ANALYSIS_COMPLETE_MESSAGE);
    }
}
