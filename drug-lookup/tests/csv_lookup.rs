//! Drug lookup over real CSV files

use drug_lookup::*;
use error_common::MedconError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn csv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

fn service() -> (DrugLookupService, NamedTempFile, NamedTempFile) {
    let formulas = csv(&[
        "Disease,Drug",
        "Malaria,Chloroquine",
        "Malaria,Artemether",
        "Diabetes Mellitus,Metformin",
        "Diabetes Mellitus,",
        ",Orphan Drug",
    ]);
    let symptoms = csv(&[
        "Disease,Symptoms,Treatments",
        "Malaria,\"fever,chills\",antimalarials",
        "Diabetes,\"thirst,fatigue\",",
        "Diabetes Melitus,\"thirst\",",
    ]);
    let service = DrugLookupService::from_paths(formulas.path(), symptoms.path()).unwrap();
    (service, formulas, symptoms)
}

#[test]
fn test_lookup_through_both_datasets() {
    let (service, _f, _s) = service();

    let outcome = service.lookup("Diabetes Melitus", DEFAULT_THRESHOLD).unwrap();
    match outcome {
        DrugLookupOutcome::Found(found) => {
            assert_eq!(found.matched_symptom_disease, "diabetes melitus");
            assert_eq!(found.matched_formula_disease, "diabetes mellitus");
            assert_eq!(found.drugs, vec!["Metformin"]);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_orphan_drug_rows_are_ignored() {
    let (service, _f, _s) = service();

    let search = service.search_formulas("orphan", DEFAULT_SEARCH_LIMIT);
    assert!(search.formulas.is_empty());
}

#[test]
fn test_outcome_serializes_with_tag() {
    let (service, _f, _s) = service();

    let outcome = service.lookup("malaria", DEFAULT_THRESHOLD).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["outcome"], "found");
    assert_eq!(json["drugs"][1], "Artemether");
}

#[test]
fn test_missing_file_maps_to_dataset_error() {
    let symptoms = csv(&["Disease", "Malaria"]);
    let err = DrugLookupService::from_paths(Path::new("/nonexistent/formulas.csv"), symptoms.path())
        .unwrap_err();
    assert_eq!(MedconError::from(err).code(), "DATASET_5001");
}
