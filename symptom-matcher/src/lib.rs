//! Symptom Matcher for the MedCon health assistant
//!
//! Matches user-reported symptoms against a reference table of diseases and
//! reports the most likely ones with a confidence and a risk band.
//!
//! # Pipeline
//!
//! 1. **Candidate Scorer** - fuzzy token-sort matching of every user symptom
//!    against each disease's known symptoms; confidence is the share of known
//!    symptoms covered
//! 2. **Ranker** - best first, ties in dataset order, at most five results
//! 3. **Fallback Gate** - when the best heuristic result is weak, an optional
//!    trained classifier proposes one more disease at a fixed confidence
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use symptom_matcher::{CsvDatasetProvider, DiseaseDetectionService, MatcherConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MatcherConfig::from_env()?;
//! let provider = CsvDatasetProvider::new("data/diseases.csv");
//! let service = DiseaseDetectionService::new(config, &provider)?;
//!
//! for prediction in service.predict(&["fever", "cough"]).await? {
//!     println!("{}: {}% ({})", prediction.disease, prediction.confidence, prediction.risk_label);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod gate;
pub mod prediction;
pub mod query;
pub mod ranker;
pub mod risk;
pub mod scorer;
pub mod service;
pub mod similarity;

pub use classifier::{
    create_classifier, ClassifierOutcome, DisabledClassifier, FallbackClassifier, HttpClassifier,
};
pub use config::*;
pub use dataset::*;
pub use error::*;
pub use prediction::*;
pub use query::SymptomQuery;
pub use risk::*;
pub use service::*;
