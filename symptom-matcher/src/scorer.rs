use crate::dataset::{DiseaseProfile, DiseaseTable};
use crate::query::SymptomQuery;
use crate::similarity::{round_one_decimal, token_sort_ratio};

/// Default token-sort similarity a user symptom needs to satisfy a known one
pub const DEFAULT_MATCH_THRESHOLD: u8 = 70;

/// Strings up to this many characters only match exactly
pub const DEFAULT_SHORT_SYMPTOM_LEN: usize = 3;

/// Coverage of one disease's known symptoms by a query
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub disease: &'a DiseaseProfile,
    /// Satisfied known symptoms, in the disease's own order
    pub matched_symptoms: Vec<String>,
    /// `100 * matched / known`, one decimal
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct SymptomScorer {
    match_threshold: u8,
    short_symptom_len: usize,
}

impl Default for SymptomScorer {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD, DEFAULT_SHORT_SYMPTOM_LEN)
    }
}

impl SymptomScorer {
    pub fn new(match_threshold: u8, short_symptom_len: usize) -> Self {
        Self {
            match_threshold,
            short_symptom_len,
        }
    }

    /// Whether a user symptom satisfies a known symptom
    pub fn symptom_matches(&self, user: &str, known: &str) -> bool {
        if user == known {
            return true;
        }
        if user.chars().count() <= self.short_symptom_len
            && known.chars().count() <= self.short_symptom_len
        {
            return false;
        }
        token_sort_ratio(user, known) >= self.match_threshold
    }

    /// Distinct known symptoms of `disease` satisfied by any query symptom
    pub fn matched_symptoms(&self, query: &SymptomQuery, disease: &DiseaseProfile) -> Vec<String> {
        let mut matched: Vec<String> = Vec::new();
        for known in &disease.known_symptoms {
            if matched.contains(known) {
                continue;
            }
            if query
                .symptoms()
                .iter()
                .any(|user| self.symptom_matches(user, known))
            {
                matched.push(known.clone());
            }
        }
        matched
    }

    /// Score one disease; `None` when it lists no symptoms
    pub fn score<'a>(&self, query: &SymptomQuery, disease: &'a DiseaseProfile) -> Option<MatchResult<'a>> {
        if !disease.has_symptoms() {
            return None;
        }

        let matched_symptoms = self.matched_symptoms(query, disease);
        let percentage =
            matched_symptoms.len() as f64 / disease.known_symptoms.len() as f64 * 100.0;

        Some(MatchResult {
            disease,
            matched_symptoms,
            confidence: round_one_decimal(percentage),
        })
    }

    /// Score every disease with at least one known symptom, in table order
    pub fn score_all<'a>(&self, query: &SymptomQuery, table: &'a DiseaseTable) -> Vec<MatchResult<'a>> {
        table
            .profiles()
            .iter()
            .filter_map(|disease| self.score(query, disease))
            .collect()
    }
}
