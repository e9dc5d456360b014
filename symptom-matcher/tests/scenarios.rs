//! End-to-end prediction scenarios
//!
//! 1. Two of three symptoms give a moderate-risk match
//! 2. Blank input is rejected before any scoring
//! 3. A single weak symptom never reaches the classifier
//! 4. A weak two-symptom query gets the classifier's disease prepended
//! 5. A classifier answer already in the list is discarded
//! 6. Short symptoms match through exact equality
//!
//! plus classifier failure, timeout and caching behavior.

use async_trait::async_trait;
use error_common::MedconError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use symptom_matcher::*;

/// Classifier answering a fixed outcome, counting its calls and keeping
/// the texts it was given
struct StubClassifier {
    outcome: ClassifierOutcome,
    calls: AtomicUsize,
    texts: Mutex<Vec<String>>,
}

impl StubClassifier {
    fn answering(outcome: ClassifierOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            texts: Mutex::new(Vec::new()),
        })
    }

    fn label(label: &str) -> Arc<Self> {
        Self::answering(ClassifierOutcome::Label(label.to_string()))
    }

    fn failing() -> Arc<Self> {
        Self::answering(ClassifierOutcome::Unavailable(
            "inference endpoint returned 503".to_string(),
        ))
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl FallbackClassifier for StubClassifier {
    async fn classify(&self, text: &str) -> ClassifierOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().unwrap().push(text.to_string());
        self.outcome.clone()
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Classifier that never answers
struct HangingClassifier;

#[async_trait]
impl FallbackClassifier for HangingClassifier {
    async fn classify(&self, _text: &str) -> ClassifierOutcome {
        std::future::pending::<ClassifierOutcome>().await
    }

    fn name(&self) -> &str {
        "hanging"
    }
}

fn table() -> Arc<DiseaseTable> {
    Arc::new(
        DiseaseTable::from_records(vec![
            RawDiseaseRecord::new("Flu", "fever,cough,fatigue", "rest,fluids"),
            RawDiseaseRecord::new("Malaria", "fever,chills,sweating,vomiting", "antimalarials"),
            RawDiseaseRecord::new(
                "Chickenpox",
                "rash,itching,redness,swelling,blisters",
                "calamine lotion",
            ),
            RawDiseaseRecord::new("Typhoid", "abdominal pain,constipation", "antibiotics"),
            RawDiseaseRecord::new("Tonsillitis", "ab,cd", ""),
            RawDiseaseRecord::new("Unknown Syndrome", "", ""),
        ])
        .unwrap(),
    )
}

fn service_with(classifier: Arc<dyn FallbackClassifier>, config: MatcherConfig) -> DiseaseDetectionService {
    DiseaseDetectionService::with_classifier(config, table(), classifier).unwrap()
}

fn names(predictions: &[Prediction]) -> Vec<&str> {
    predictions.iter().map(|p| p.disease.as_str()).collect()
}

#[tokio::test]
async fn test_scenario_1_two_of_three_symptoms() {
    let classifier = StubClassifier::label("Typhoid");
    let service = service_with(classifier.clone(), MatcherConfig::default());

    let predictions = service.predict(&["fever", "cough"]).await.unwrap();

    let flu = &predictions[0];
    assert_eq!(flu.disease, "Flu");
    assert_eq!(flu.matched_symptoms, vec!["fever", "cough"]);
    assert_eq!(flu.confidence, 66.7);
    assert!(flu.risk_label.starts_with("Moderate Risk"));
    assert_eq!(flu.risk_color, RiskColor::Yellow);
    assert_eq!(flu.treatments, vec!["rest", "fluids"]);
    assert_eq!(flu.source, PredictionSource::Heuristic);

    // confident heuristic result, classifier untouched
    assert_eq!(classifier.calls(), 0);
}

#[tokio::test]
async fn test_scenario_2_blank_input_is_invalid() {
    let classifier = StubClassifier::label("Typhoid");
    let service = service_with(classifier.clone(), MatcherConfig::default());

    let err = service.predict(&["", "   "]).await.unwrap_err();
    assert!(matches!(err, MatcherError::InvalidInput(_)));
    assert!(err.is_client_error());
    assert_eq!(MedconError::from(err).code(), "VALIDATION_1001");

    let empty: [&str; 0] = [];
    assert!(service.predict(&empty).await.is_err());
    assert_eq!(classifier.calls(), 0);
}

#[tokio::test]
async fn test_scenario_3_single_symptom_skips_fallback() {
    let classifier = StubClassifier::label("Typhoid");
    let service = service_with(classifier.clone(), MatcherConfig::default());

    let response = service
        .predict_request(&SymptomRequest {
            symptoms: vec!["blurred vision".to_string()],
        })
        .await
        .unwrap();

    assert!(response.predictions.is_empty());
    assert_eq!(response.message, NO_MATCH_MESSAGE);
    assert_eq!(classifier.calls(), 0);
}

#[tokio::test]
async fn test_scenario_4_weak_result_gets_fallback_prepended() {
    let classifier = StubClassifier::label("Disease X");
    let service = service_with(classifier.clone(), MatcherConfig::default());

    let predictions = service.predict(&["chills", "rash"]).await.unwrap();

    assert_eq!(classifier.calls(), 1);
    assert_eq!(names(&predictions), vec!["Disease X", "Malaria", "Chickenpox"]);

    let fallback = &predictions[0];
    assert_eq!(fallback.confidence, 30.0);
    assert_eq!(fallback.source, PredictionSource::Fallback);
    assert!(fallback.matched_symptoms.is_empty());
    assert!(fallback.treatments.is_empty());
    assert_eq!(fallback.risk_color, RiskColor::Green);

    assert_eq!(predictions[1].confidence, 25.0);
    assert_eq!(predictions[2].confidence, 20.0);
}

#[tokio::test]
async fn test_repeated_symptom_counts_toward_fallback_gate() {
    let classifier = StubClassifier::label("Disease X");
    let service = service_with(classifier.clone(), MatcherConfig::default());

    let predictions = service
        .predict(&["blurred vision", "Blurred Vision"])
        .await
        .unwrap();

    assert_eq!(classifier.calls(), 1);
    assert_eq!(classifier.texts(), vec!["blurred vision blurred vision"]);
    assert_eq!(names(&predictions), vec!["Disease X"]);
    assert_eq!(predictions[0].source, PredictionSource::Fallback);
}

#[tokio::test]
async fn test_scenario_5_duplicate_fallback_is_discarded() {
    let classifier = StubClassifier::label("Chickenpox");
    let service = service_with(classifier.clone(), MatcherConfig::default());

    let predictions = service.predict(&["chills", "rash"]).await.unwrap();

    assert_eq!(classifier.calls(), 1);
    assert_eq!(names(&predictions), vec!["Malaria", "Chickenpox"]);
    assert!(predictions
        .iter()
        .all(|p| p.source == PredictionSource::Heuristic));
}

#[tokio::test]
async fn test_fallback_label_matched_case_insensitively() {
    let service = service_with(StubClassifier::label("chickenpox"), MatcherConfig::default());

    let predictions = service.predict(&["chills", "rash"]).await.unwrap();
    assert_eq!(names(&predictions), vec!["Malaria", "Chickenpox"]);
}

#[tokio::test]
async fn test_scenario_6_short_symptoms_match_exactly() {
    let service = service_with(StubClassifier::label("Typhoid"), MatcherConfig::default());

    let predictions = service.predict(&["ab"]).await.unwrap();

    assert_eq!(names(&predictions), vec!["Tonsillitis"]);
    assert_eq!(predictions[0].matched_symptoms, vec!["ab"]);
    assert_eq!(predictions[0].confidence, 50.0);
    assert_eq!(predictions[0].risk_color, RiskColor::LightBlue);
}

#[tokio::test]
async fn test_known_fallback_disease_carries_treatments() {
    let service = service_with(StubClassifier::label("Typhoid"), MatcherConfig::default());

    let predictions = service.predict(&["chills", "rash"]).await.unwrap();

    assert_eq!(predictions[0].disease, "Typhoid");
    assert_eq!(predictions[0].treatments, vec!["antibiotics"]);
    assert_eq!(predictions[0].confidence, 30.0);
}

#[tokio::test]
async fn test_classifier_failure_degrades_to_heuristic() {
    let classifier = StubClassifier::failing();
    let service = service_with(classifier.clone(), MatcherConfig::default());

    let predictions = service.predict(&["chills", "rash"]).await.unwrap();
    assert_eq!(names(&predictions), vec!["Malaria", "Chickenpox"]);

    // failed fallback results are not cached
    service.predict(&["chills", "rash"]).await.unwrap();
    assert_eq!(classifier.calls(), 2);
}

#[tokio::test]
async fn test_hanging_classifier_times_out() {
    let config = MatcherConfig {
        fallback_timeout_ms: 50,
        ..Default::default()
    };
    let service = service_with(Arc::new(HangingClassifier), config);

    let predictions = service.predict(&["chills", "rash"]).await.unwrap();
    assert_eq!(names(&predictions), vec!["Malaria", "Chickenpox"]);
}

#[tokio::test]
async fn test_disabled_classifier_returns_heuristic_only() {
    let service = service_with(Arc::new(DisabledClassifier), MatcherConfig::default());

    let predictions = service.predict(&["chills", "rash"]).await.unwrap();
    assert_eq!(names(&predictions), vec!["Malaria", "Chickenpox"]);
    assert!(!service.health().models_loaded);
}

#[tokio::test]
async fn test_repeated_query_is_served_from_cache() {
    let classifier = StubClassifier::label("Disease X");
    let service = service_with(classifier.clone(), MatcherConfig::default());

    let first = service.predict(&["chills", "rash"]).await.unwrap();
    let second = service.predict(&["Rash ", "CHILLS", "rash"]).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(classifier.calls(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_share_table_and_cache() {
    let queries: Vec<Vec<&'static str>> = vec![
        vec!["fever", "cough"],
        vec!["chills", "rash"],
        vec!["ab"],
        vec!["Rash", "itching", "BLISTERS"],
    ];

    let reference = service_with(
        StubClassifier::label("Disease X"),
        MatcherConfig {
            cache_capacity: 0,
            ..Default::default()
        },
    );
    let mut expected = Vec::new();
    for query in &queries {
        expected.push(reference.predict(query.as_slice()).await.unwrap());
    }

    let shared = Arc::new(service_with(
        StubClassifier::label("Disease X"),
        MatcherConfig::default(),
    ));
    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..8 {
        for (idx, query) in queries.iter().enumerate() {
            let service = Arc::clone(&shared);
            let query = query.clone();
            tasks.spawn(async move { (idx, service.predict(query.as_slice()).await) });
        }
    }

    let mut completed = 0;
    while let Some(joined) = tasks.join_next().await {
        let (idx, result) = joined.unwrap();
        assert_eq!(result.unwrap(), expected[idx]);
        completed += 1;
    }
    assert_eq!(completed, 8 * queries.len());
}

#[tokio::test]
async fn test_cache_disabled_recomputes() {
    let classifier = StubClassifier::label("Disease X");
    let config = MatcherConfig {
        cache_capacity: 0,
        ..Default::default()
    };
    let service = service_with(classifier.clone(), config);

    service.predict(&["chills", "rash"]).await.unwrap();
    service.predict(&["chills", "rash"]).await.unwrap();
    assert_eq!(classifier.calls(), 2);
}

#[tokio::test]
async fn test_disease_without_symptoms_never_predicted() {
    let service = service_with(StubClassifier::label("Disease X"), MatcherConfig::default());

    for query in [vec!["fever", "cough"], vec!["chills", "rash"], vec!["ab"]] {
        let predictions = service.predict(query.as_slice()).await.unwrap();
        assert!(!names(&predictions).contains(&"Unknown Syndrome"));
    }
}

#[tokio::test]
async fn test_service_from_csv_dataset() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Disease,Symptoms,Treatments").unwrap();
    writeln!(file, "Flu,\"fever,cough,fatigue\",\"rest,fluids\"").unwrap();
    writeln!(file, "Migraine,\"headache,nausea\",").unwrap();

    let provider = CsvDatasetProvider::new(file.path());
    let service = DiseaseDetectionService::new(MatcherConfig::default(), &provider).unwrap();

    assert_eq!(service.diseases(), vec!["Flu", "Migraine"]);
    let predictions = service.predict(&["headache"]).await.unwrap();
    assert_eq!(predictions[0].disease, "Migraine");
    assert_eq!(predictions[0].confidence, 50.0);
}

#[tokio::test]
async fn test_broken_dataset_is_fatal() {
    let provider = StaticDatasetProvider::new(vec![RawDiseaseRecord::new("A", "", "")]);
    let err = DiseaseDetectionService::new(MatcherConfig::default(), &provider)
        .err()
        .unwrap();
    assert!(matches!(err, MatcherError::DatasetLoad(_)));
}
