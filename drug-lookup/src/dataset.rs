use std::path::Path;

use crate::error::{DrugLookupError, DrugLookupResult};

/// One row of the formulas dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaRow {
    /// Trimmed and lower-cased
    pub disease: String,
    /// `None` when the row lists no drug
    pub drug: Option<String>,
}

impl FormulaRow {
    pub fn new(disease: &str, drug: Option<&str>) -> Self {
        Self {
            disease: normalize_disease(disease),
            drug: drug
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        }
    }
}

pub fn normalize_disease(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Read `Disease` and `Drug` columns; rows without a disease are dropped
pub fn load_formulas(path: &Path) -> DrugLookupResult<Vec<FormulaRow>> {
    let rows = read_columns(path, &["Disease", "Drug"])?;
    let formulas: Vec<FormulaRow> = rows
        .iter()
        .filter_map(|row| match row.as_slice() {
            [disease, drug] if !disease.trim().is_empty() => Some(FormulaRow::new(disease, Some(drug))),
            _ => None,
        })
        .collect();

    if formulas.is_empty() {
        return Err(DrugLookupError::DatasetLoad(format!(
            "{}: no formula rows with a disease",
            path.display()
        )));
    }
    Ok(formulas)
}

/// Read the `Disease` column of the symptom dataset, normalized, blanks dropped
pub fn load_symptom_diseases(path: &Path) -> DrugLookupResult<Vec<String>> {
    let rows = read_columns(path, &["Disease"])?;
    let diseases: Vec<String> = rows
        .iter()
        .filter_map(|row| row.first())
        .map(|disease| normalize_disease(disease))
        .filter(|disease| !disease.is_empty())
        .collect();

    if diseases.is_empty() {
        return Err(DrugLookupError::DatasetLoad(format!(
            "{}: no disease rows",
            path.display()
        )));
    }
    Ok(diseases)
}

/// Project a headed CSV onto `columns`, matched case-insensitively
fn read_columns(path: &Path, columns: &[&str]) -> DrugLookupResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| DrugLookupError::DatasetLoad(format!("Cannot open {}: {}", path.display(), e)))?;

    let headers = reader.headers()?.clone();
    let indices = columns
        .iter()
        .map(|name| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    DrugLookupError::DatasetLoad(format!(
                        "{}: missing '{}' column",
                        path.display(),
                        name
                    ))
                })
        })
        .collect::<DrugLookupResult<Vec<usize>>>()?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            indices
                .iter()
                .map(|&idx| record.get(idx).unwrap_or_default().to_string())
                .collect(),
        );
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_formulas_normalized_and_blank_diseases_dropped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "disease,DRUG").unwrap();
        writeln!(file, "  Malaria ,Chloroquine").unwrap();
        writeln!(file, ",Aspirin").unwrap();
        writeln!(file, "Malaria,").unwrap();

        let rows = load_formulas(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], FormulaRow::new("malaria", Some("Chloroquine")));
        assert_eq!(rows[1].drug, None);
    }

    #[test]
    fn test_symptom_diseases_read_single_column() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Disease,Symptoms").unwrap();
        writeln!(file, "Flu,\"fever,cough\"").unwrap();
        writeln!(file, " ,rash").unwrap();
        writeln!(file, "TYPHOID,fever").unwrap();

        let diseases = load_symptom_diseases(file.path()).unwrap();
        assert_eq!(diseases, vec!["flu", "typhoid"]);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Disease,Symptoms").unwrap();
        writeln!(file, "Flu,fever").unwrap();

        let err = load_formulas(file.path()).unwrap_err();
        assert!(matches!(err, DrugLookupError::DatasetLoad(msg) if msg.contains("Drug")));
    }

    #[test]
    fn test_dataset_without_rows_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Disease").unwrap();

        assert!(load_symptom_diseases(file.path()).is_err());
    }
}
