use serde::{Deserialize, Serialize};

use crate::dataset::DiseaseProfile;
use crate::risk::{classify_risk, RiskColor};
use crate::scorer::MatchResult;

/// Confidence assigned to every fallback classifier prediction
pub const FALLBACK_CONFIDENCE: f64 = 30.0;

pub const NO_MATCH_MESSAGE: &str =
    "No diseases found matching your symptoms. Please consult a healthcare professional.";
pub const ANALYSIS_COMPLETE_MESSAGE: &str =
    "Analysis complete. Please consult a healthcare professional for accurate diagnosis.";

/// Which stage produced a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionSource {
    Heuristic,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub disease: String,
    pub confidence: f64,
    pub matched_symptoms: Vec<String>,
    pub treatments: Vec<String>,
    pub risk_label: String,
    pub risk_color: RiskColor,
    pub source: PredictionSource,
}

impl Prediction {
    fn new(
        disease: String,
        confidence: f64,
        matched_symptoms: Vec<String>,
        treatments: Vec<String>,
        source: PredictionSource,
    ) -> Self {
        let risk = classify_risk(confidence);
        Self {
            disease,
            confidence,
            matched_symptoms,
            treatments,
            risk_label: risk.label().to_string(),
            risk_color: risk.color(),
            source,
        }
    }

    pub fn heuristic(result: MatchResult<'_>) -> Self {
        Self::new(
            result.disease.name.clone(),
            result.confidence,
            result.matched_symptoms,
            result.disease.treatments.clone(),
            PredictionSource::Heuristic,
        )
    }

    /// Classifier-proposed disease; `profile` is `None` when the label is
    /// not in the reference table
    pub fn fallback(label: &str, profile: Option<&DiseaseProfile>, matched_symptoms: Vec<String>) -> Self {
        let (disease, treatments) = match profile {
            Some(profile) => (profile.name.clone(), profile.treatments.clone()),
            None => (label.to_string(), Vec::new()),
        };
        Self::new(
            disease,
            FALLBACK_CONFIDENCE,
            matched_symptoms,
            treatments,
            PredictionSource::Fallback,
        )
    }
}

/// Request accepted at the service boundary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymptomRequest {
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predictions: Vec<Prediction>,
    pub message: String,
}

impl PredictionResponse {
    pub fn new(predictions: Vec<Prediction>) -> Self {
        let message = if predictions.is_empty() {
            NO_MATCH_MESSAGE
        } else {
            ANALYSIS_COMPLETE_MESSAGE
        };
        Self {
            predictions,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub models_loaded: bool,
    pub classifier: String,
    pub diseases_loaded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawDiseaseRecord;

    #[test]
    fn test_heuristic_prediction_copies_treatments_and_risk() {
        let profile = DiseaseProfile::from_record(&RawDiseaseRecord::new(
            "Flu",
            "fever,cough,fatigue",
            "rest,fluids",
        ));
        let prediction = Prediction::heuristic(MatchResult {
            disease: &profile,
            matched_symptoms: vec!["fever".into(), "cough".into()],
            confidence: 66.7,
        });
        assert_eq!(prediction.treatments, vec!["rest", "fluids"]);
        assert_eq!(prediction.risk_color, RiskColor::Yellow);
        assert!(prediction.risk_label.starts_with("Moderate Risk"));
        assert_eq!(prediction.source, PredictionSource::Heuristic);
    }

    #[test]
    fn test_fallback_prediction_is_fixed_confidence() {
        let prediction = Prediction::fallback("Dengue", None, vec![]);
        assert_eq!(prediction.confidence, FALLBACK_CONFIDENCE);
        assert_eq!(prediction.disease, "Dengue");
        assert!(prediction.treatments.is_empty());
        assert_eq!(prediction.risk_color, RiskColor::Green);
        assert_eq!(prediction.source, PredictionSource::Fallback);
    }

    #[test]
    fn test_response_message_depends_on_predictions() {
        assert_eq!(PredictionResponse::new(vec![]).message, NO_MATCH_MESSAGE);
        let response = PredictionResponse::new(vec![Prediction::fallback("X", None, vec![])]);
        assert_eq!(response.message, ANALYSIS_COMPLETE_MESSAGE);
    }

    #[test]
    fn test_prediction_serializes_snake_case() {
        let prediction = Prediction::fallback("X", None, vec![]);
        let json = serde_json::to_value(&prediction).unwrap();
        assert_eq!(json["risk_color"], "green");
        assert_eq!(json["source"], "fallback");
        assert_eq!(json["confidence"], 30.0);
    }
}
