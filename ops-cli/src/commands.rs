use colored::Colorize;
use drug_lookup::DrugLookupService;
use error_common::{ErrorResponse, MedconError, Result};
use serde::Serialize;
use std::path::Path;
use symptom_matcher::{CsvDatasetProvider, DiseaseDetectionService, MatcherConfig, SymptomRequest};
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::render;

/// Execute a parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Command::Predict { dataset, symptoms } => {
            let service = detection_service(&dataset)?;
            let response = service.predict_request(&SymptomRequest { symptoms }).await?;
            emit(json, &response, || render::prediction_response(&response))
        }
        Command::Diseases { dataset } => {
            let names = detection_service(&dataset)?.diseases();
            emit(json, &names, || render::diseases(&names))
        }
        Command::Health { dataset } => {
            let status = detection_service(&dataset)?.health();
            emit(json, &status, || render::health(&status))
        }
        Command::Drugs {
            formulas,
            symptom_dataset,
            threshold,
            disease,
        } => {
            let outcome = DrugLookupService::from_paths(&formulas, &symptom_dataset)?.lookup(&disease, threshold)?;
            emit(json, &outcome, || render::drug_outcome(&outcome))
        }
        Command::SearchFormulas {
            formulas,
            symptom_dataset,
            limit,
            query,
        } => {
            let search = DrugLookupService::from_paths(&formulas, &symptom_dataset)?.search_formulas(&query, limit);
            emit(json, &search, || render::formula_search(&search))
        }
    }
}

fn detection_service(dataset: &Path) -> Result<DiseaseDetectionService> {
    let config = MatcherConfig::from_env()?;
    debug!(dataset = %dataset.display(), "Building detection service");
    Ok(DiseaseDetectionService::new(config, &CsvDatasetProvider::new(dataset))?)
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(value)
            .map_err(|e| MedconError::InternalError(format!("Cannot serialize output: {}", e)))?;
        println!("{}", rendered);
    } else {
        print!("{}", text());
    }
    Ok(())
}

/// JSON form of a failed command
pub fn error_body(err: &MedconError) -> Option<String> {
    serde_json::to_string_pretty(&ErrorResponse::from(err)).ok()
}

/// Report a failed command: an [`ErrorResponse`] on stdout under `--json`,
/// a coloured line on stderr otherwise
pub fn report_error(json: bool, err: &MedconError) {
    match json.then(|| error_body(err)).flatten() {
        Some(body) => println!("{}", body),
        None => eprintln!("{} [{}] {}", "error:".red().bold(), err.code(), err),
    }
}
