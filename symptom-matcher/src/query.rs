use serde::{Deserialize, Serialize};

use crate::error::{MatcherError, MatcherResult};

/// A normalized symptom query
///
/// Symptoms are trimmed and lower-cased and blanks are dropped; repeats are
/// kept in input order. The query is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomQuery {
    symptoms: Vec<String>,
}

impl SymptomQuery {
    /// Normalize raw user input, rejecting queries with no usable symptom
    pub fn parse<S: AsRef<str>>(raw_symptoms: &[S]) -> MatcherResult<Self> {
        let mut symptoms: Vec<String> = Vec::with_capacity(raw_symptoms.len());
        for raw in raw_symptoms {
            let symptom = raw.as_ref().trim().to_lowercase();
            if !symptom.is_empty() {
                symptoms.push(symptom);
            }
        }

        if symptoms.is_empty() {
            return Err(MatcherError::InvalidInput(
                "At least one symptom is required".to_string(),
            ));
        }

        Ok(Self { symptoms })
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    /// Text handed to the fallback classifier
    pub fn joined(&self) -> String {
        self.symptoms.join(" ")
    }

    /// Order-independent identity of the query: its distinct symptoms, sorted
    pub fn cache_key(&self) -> Vec<String> {
        let mut key = self.symptoms.clone();
        key.sort_unstable();
        key.dedup();
        key
    }
}
