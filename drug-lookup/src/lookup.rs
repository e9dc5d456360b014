use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use symptom_matcher::similarity::{indel_score, partial_score};
use tracing::{debug, info};

use crate::dataset::{load_formulas, load_symptom_diseases, normalize_disease, FormulaRow};
use crate::error::{DrugLookupError, DrugLookupResult};

/// Similarity a disease name needs in both lookups
pub const DEFAULT_THRESHOLD: f64 = 85.0;

/// Formula search results returned at most
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

pub const MIN_QUERY_LEN: usize = 2;
pub const MIN_SEARCH_SCORE: f64 = 60.0;

pub const QUERY_TOO_SHORT_MESSAGE: &str = "Query too short. Please enter at least 2 characters.";

/// Drugs found for a disease through both datasets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugRecommendation {
    pub input: String,
    pub matched_symptom_disease: String,
    pub matched_formula_disease: String,
    pub drugs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DrugLookupOutcome {
    NotInSymptomDataset { input: String },
    NoFormulaMatch { disease: String },
    NoDrugsListed { disease: String },
    Found(DrugRecommendation),
}

impl DrugLookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, DrugLookupOutcome::Found(_))
    }

    pub fn drugs(&self) -> &[String] {
        match self {
            DrugLookupOutcome::Found(found) => &found.drugs,
            _ => &[],
        }
    }

    pub fn message(&self) -> String {
        match self {
            DrugLookupOutcome::NotInSymptomDataset { input } => {
                format!("'{}' not found in symptoms dataset.", input)
            }
            DrugLookupOutcome::NoFormulaMatch { disease } => format!("No drug found for '{}'.", disease),
            DrugLookupOutcome::NoDrugsListed { disease } => format!("No drugs listed for '{}'.", disease),
            DrugLookupOutcome::Found(found) => format!(
                "Found {} drugs for {}",
                found.drugs.len(),
                found.matched_formula_disease
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaMatch {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaSearch {
    pub query: String,
    pub formulas: Vec<FormulaMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Disease → drug lookup over the formulas and symptom datasets
#[derive(Debug, Clone)]
pub struct DrugLookupService {
    symptom_diseases: Vec<String>,
    formula_diseases: Vec<String>,
    drugs_by_disease: HashMap<String, Vec<String>>,
    all_drugs: Vec<String>,
}

impl DrugLookupService {
    pub fn from_paths(formulas: &Path, symptom_dataset: &Path) -> DrugLookupResult<Self> {
        let service = Self::from_rows(load_formulas(formulas)?, load_symptom_diseases(symptom_dataset)?);
        info!(
            formulas = %formulas.display(),
            symptom_dataset = %symptom_dataset.display(),
            formula_diseases = service.formula_diseases.len(),
            symptom_diseases = service.symptom_diseases.len(),
            drugs = service.all_drugs.len(),
            "Drug lookup datasets loaded"
        );
        Ok(service)
    }

    /// Build from normalized rows; every list keeps first-seen order
    pub fn from_rows(formulas: Vec<FormulaRow>, symptom_diseases: Vec<String>) -> Self {
        let mut formula_diseases = Vec::new();
        let mut drugs_by_disease: HashMap<String, Vec<String>> = HashMap::new();
        let mut all_drugs = Vec::new();

        for row in formulas {
            let drugs = drugs_by_disease.entry(row.disease.clone()).or_insert_with(|| {
                formula_diseases.push(row.disease.clone());
                Vec::new()
            });
            if let Some(drug) = row.drug {
                push_unique(&mut all_drugs, &drug);
                push_unique(drugs, &drug);
            }
        }

        let mut unique_symptom_diseases = Vec::new();
        for disease in &symptom_diseases {
            push_unique(&mut unique_symptom_diseases, disease);
        }

        Self {
            symptom_diseases: unique_symptom_diseases,
            formula_diseases,
            drugs_by_disease,
            all_drugs,
        }
    }

    /// Resolve a disease name to its recommended drugs
    pub fn lookup(&self, input: &str, threshold: f64) -> DrugLookupResult<DrugLookupOutcome> {
        let input = normalize_disease(input);
        if input.is_empty() {
            return Err(DrugLookupError::InvalidInput(
                "Disease name is required".to_string(),
            ));
        }

        let Some(symptom_disease) = best_match(&input, &self.symptom_diseases, threshold) else {
            debug!(input = %input, "Disease not in symptom dataset");
            return Ok(DrugLookupOutcome::NotInSymptomDataset { input });
        };

        let Some(formula_disease) = best_match(symptom_disease, &self.formula_diseases, threshold) else {
            debug!(disease = %symptom_disease, "No formula disease close enough");
            return Ok(DrugLookupOutcome::NoFormulaMatch {
                disease: symptom_disease.to_string(),
            });
        };

        let drugs = self
            .drugs_by_disease
            .get(formula_disease)
            .cloned()
            .unwrap_or_default();
        if drugs.is_empty() {
            return Ok(DrugLookupOutcome::NoDrugsListed {
                disease: formula_disease.to_string(),
            });
        }

        debug!(
            input = %input,
            symptom_disease = %symptom_disease,
            formula_disease = %formula_disease,
            drugs = drugs.len(),
            "Drug lookup matched"
        );
        Ok(DrugLookupOutcome::Found(DrugRecommendation {
            input,
            matched_symptom_disease: symptom_disease.to_string(),
            matched_formula_disease: formula_disease.to_string(),
            drugs,
        }))
    }

    /// Unique symptom-dataset diseases in file order
    pub fn diseases(&self) -> &[String] {
        &self.symptom_diseases
    }

    /// Fuzzy search over every known drug name
    ///
    /// Only the query is lower-cased; drug names are scored as stored, so
    /// "para" ranks "paracetamol syrup" above "Paracetamol".
    pub fn search_formulas(&self, query: &str, limit: usize) -> FormulaSearch {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_QUERY_LEN {
            return FormulaSearch {
                query,
                formulas: Vec::new(),
                message: Some(QUERY_TOO_SHORT_MESSAGE.to_string()),
            };
        }

        let mut scored: Vec<FormulaMatch> = self
            .all_drugs
            .iter()
            .map(|drug| FormulaMatch {
                name: drug.clone(),
                score: partial_score(&query, drug),
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(limit);
        scored.retain(|m| m.score >= MIN_SEARCH_SCORE);

        FormulaSearch {
            query,
            formulas: scored,
            message: None,
        }
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|existing| existing == value) {
        list.push(value.to_string());
    }
}

/// Highest-scoring choice at or above `threshold`; the first one wins ties
fn best_match<'a>(query: &str, choices: &'a [String], threshold: f64) -> Option<&'a str> {
    let mut best: Option<(&'a str, f64)> = None;
    for choice in choices {
        let score = indel_score(query, choice);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((choice.as_str(), score));
        }
    }
    best.filter(|(_, score)| *score >= threshold)
        .map(|(choice, _)| choice)
}
