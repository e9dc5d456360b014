use crate::scorer::MatchResult;

/// Candidates kept after sorting
pub const DEFAULT_TOP_CANDIDATES: usize = 10;

/// Heuristic predictions returned at most
pub const DEFAULT_MAX_PREDICTIONS: usize = 5;

/// Top heuristic confidence below which the fallback classifier is consulted
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 30.0;

/// Queries shorter than this never reach the fallback classifier
pub const DEFAULT_MIN_FALLBACK_SYMPTOMS: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    top_candidates: usize,
    max_predictions: usize,
    confidence_floor: f64,
    min_fallback_symptoms: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(
            DEFAULT_TOP_CANDIDATES,
            DEFAULT_MAX_PREDICTIONS,
            DEFAULT_CONFIDENCE_FLOOR,
            DEFAULT_MIN_FALLBACK_SYMPTOMS,
        )
    }
}

impl Ranker {
    pub fn new(
        top_candidates: usize,
        max_predictions: usize,
        confidence_floor: f64,
        min_fallback_symptoms: usize,
    ) -> Self {
        Self {
            top_candidates,
            max_predictions,
            confidence_floor,
            min_fallback_symptoms,
        }
    }

    /// Heuristic predictions: best first, ties in table order, zero dropped
    pub fn select<'a>(&self, mut candidates: Vec<MatchResult<'a>>) -> Vec<MatchResult<'a>> {
        // sort_by is stable, which keeps equal confidences in table order
        candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        candidates.truncate(self.top_candidates);
        candidates
            .into_iter()
            .take(self.max_predictions)
            .filter(|candidate| candidate.confidence > 0.0)
            .collect()
    }

    /// Whether the heuristic result is weak enough to consult the classifier
    pub fn needs_fallback(&self, heuristic: &[MatchResult<'_>], query_len: usize) -> bool {
        let weak = heuristic
            .first()
            .map_or(true, |best| best.confidence < self.confidence_floor);
        weak && query_len >= self.min_fallback_symptoms
    }
}
