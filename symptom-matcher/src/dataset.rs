//! Disease reference data
//!
//! The table is built once at start-up from a [`DatasetProvider`] and is
//! read-only afterwards; services share it behind an `Arc`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{MatcherError, MatcherResult};

/// One row as supplied by a dataset provider, before normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDiseaseRecord {
    pub disease: String,
    /// Comma-delimited symptom list
    pub symptoms: String,
    /// Comma-delimited treatment list, possibly empty
    pub treatments: String,
}

impl RawDiseaseRecord {
    pub fn new(
        disease: impl Into<String>,
        symptoms: impl Into<String>,
        treatments: impl Into<String>,
    ) -> Self {
        Self {
            disease: disease.into(),
            symptoms: symptoms.into(),
            treatments: treatments.into(),
        }
    }
}

/// Source of the disease → symptoms / treatments tables
pub trait DatasetProvider: Send + Sync {
    fn load(&self) -> MatcherResult<Vec<RawDiseaseRecord>>;

    /// Human readable origin, for logs
    fn describe(&self) -> String;
}

/// Reads a CSV with `Disease`, `Symptoms` and optional `Treatments` columns
///
/// Header names are matched case-insensitively.
#[derive(Debug, Clone)]
pub struct CsvDatasetProvider {
    path: PathBuf,
}

impl CsvDatasetProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DatasetProvider for CsvDatasetProvider {
    fn load(&self) -> MatcherResult<Vec<RawDiseaseRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                MatcherError::DatasetLoad(format!("Cannot open {}: {}", self.path.display(), e))
            })?;

        let headers = reader.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let disease_idx = column("Disease").ok_or_else(|| {
            MatcherError::DatasetLoad(format!("{}: missing 'Disease' column", self.path.display()))
        })?;
        let symptoms_idx = column("Symptoms").ok_or_else(|| {
            MatcherError::DatasetLoad(format!("{}: missing 'Symptoms' column", self.path.display()))
        })?;
        let treatments_idx = column("Treatments");

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let field = |idx: usize| row.get(idx).unwrap_or_default().to_string();
            records.push(RawDiseaseRecord {
                disease: field(disease_idx),
                symptoms: field(symptoms_idx),
                treatments: treatments_idx.map(field).unwrap_or_default(),
            });
        }

        Ok(records)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}

/// In-memory rows, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct StaticDatasetProvider {
    records: Vec<RawDiseaseRecord>,
}

impl StaticDatasetProvider {
    pub fn new(records: Vec<RawDiseaseRecord>) -> Self {
        Self { records }
    }
}

impl DatasetProvider for StaticDatasetProvider {
    fn load(&self) -> MatcherResult<Vec<RawDiseaseRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("static:{} rows", self.records.len())
    }
}

/// A disease with its normalized symptoms and treatments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseProfile {
    pub name: String,
    /// Lower-cased, trimmed, never blank; repeats kept; may be empty
    pub known_symptoms: Vec<String>,
    pub treatments: Vec<String>,
}

impl DiseaseProfile {
    pub fn from_record(record: &RawDiseaseRecord) -> Self {
        Self {
            name: record.disease.trim().to_string(),
            known_symptoms: split_list(&record.symptoms, true),
            treatments: split_list(&record.treatments, false),
        }
    }

    pub fn has_symptoms(&self) -> bool {
        !self.known_symptoms.is_empty()
    }
}

fn split_list(value: &str, lowercase: bool) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| if lowercase { item.to_lowercase() } else { item.to_string() })
        .collect()
}

/// Immutable, ordered disease table
#[derive(Debug, Clone, Default)]
pub struct DiseaseTable {
    profiles: Vec<DiseaseProfile>,
    by_name: HashMap<String, usize>,
    by_lower_name: HashMap<String, usize>,
}

impl DiseaseTable {
    /// Load and validate the table
    ///
    /// Fails when the provider fails, yields no rows, or no disease has a
    /// single symptom: running on such a table would report every query as
    /// "no match" instead of surfacing the broken dataset.
    pub fn load(provider: &dyn DatasetProvider) -> MatcherResult<Self> {
        let records = provider.load()?;
        let table = Self::from_records(records)?;
        info!(
            source = %provider.describe(),
            diseases = table.len(),
            with_symptoms = table.profiles.iter().filter(|p| p.has_symptoms()).count(),
            "Disease table loaded"
        );
        Ok(table)
    }

    /// Build from raw rows; a repeated name keeps its first position and
    /// takes the data of its last row
    pub fn from_records(records: Vec<RawDiseaseRecord>) -> MatcherResult<Self> {
        let mut table = Self::default();

        for record in &records {
            let profile = DiseaseProfile::from_record(record);
            if profile.name.is_empty() {
                continue;
            }
            match table.by_name.get(&profile.name) {
                Some(&idx) => {
                    warn!(disease = %profile.name, "Duplicate disease row, keeping the last one");
                    if let Some(slot) = table.profiles.get_mut(idx) {
                        *slot = profile;
                    }
                }
                None => {
                    let idx = table.profiles.len();
                    table.by_name.insert(profile.name.clone(), idx);
                    table
                        .by_lower_name
                        .entry(profile.name.to_lowercase())
                        .or_insert(idx);
                    table.profiles.push(profile);
                }
            }
        }

        if table.profiles.is_empty() {
            return Err(MatcherError::DatasetLoad(
                "Dataset contains no disease rows".to_string(),
            ));
        }
        if !table.profiles.iter().any(DiseaseProfile::has_symptoms) {
            return Err(MatcherError::DatasetLoad(
                "No disease in the dataset lists any symptom".to_string(),
            ));
        }

        Ok(table)
    }

    pub fn profiles(&self) -> &[DiseaseProfile] {
        &self.profiles
    }

    /// Look a disease up by exact name, then case-insensitively
    pub fn get(&self, name: &str) -> Option<&DiseaseProfile> {
        let name = name.trim();
        self.by_name
            .get(name)
            .or_else(|| self.by_lower_name.get(&name.to_lowercase()))
            .and_then(|&idx| self.profiles.get(idx))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
