//! Terminal rendering of command results

use colored::{Color, Colorize};
use drug_lookup::{DrugLookupOutcome, FormulaSearch};
use std::fmt::Write;
use symptom_matcher::{HealthStatus, PredictionResponse, PredictionSource, RiskColor};

fn terminal_color(color: RiskColor) -> Color {
    match color {
        RiskColor::Red => Color::Red,
        RiskColor::Yellow => Color::Yellow,
        RiskColor::LightBlue => Color::BrightBlue,
        RiskColor::Green => Color::Green,
    }
}

fn list_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

pub fn prediction_response(response: &PredictionResponse) -> String {
    let mut out = String::new();

    for (rank, prediction) in response.predictions.iter().enumerate() {
        let color = terminal_color(prediction.risk_color);
        let source = match prediction.source {
            PredictionSource::Heuristic => "",
            PredictionSource::Fallback => " (classifier)",
        };
        let _ = writeln!(
            out,
            "{}. {}{} {}",
            rank + 1,
            prediction.disease.bold(),
            source,
            format!("{:.1}%", prediction.confidence).color(color),
        );
        let _ = writeln!(out, "   risk:       {}", prediction.risk_label.color(color));
        let _ = writeln!(out, "   matched:    {}", list_or_dash(&prediction.matched_symptoms));
        let _ = writeln!(out, "   treatments: {}", list_or_dash(&prediction.treatments));
    }

    let _ = writeln!(out, "{}", response.message.italic());
    out
}

pub fn health(status: &HealthStatus) -> String {
    format!(
        "status:     {}\nclassifier: {} ({})\ndiseases:   {}\n",
        status.status.green(),
        status.classifier,
        if status.models_loaded { "loaded" } else { "not loaded" },
        status.diseases_loaded
    )
}

pub fn diseases(names: &[String]) -> String {
    let mut out = String::new();
    for name in names {
        let _ = writeln!(out, "{}", name);
    }
    let _ = writeln!(out, "{} diseases", names.len());
    out
}

pub fn drug_outcome(outcome: &DrugLookupOutcome) -> String {
    match outcome {
        DrugLookupOutcome::Found(found) => format!(
            "Input: {}\nMatched disease (symptoms dataset): {}\nMatched disease (formulas dataset): {}\nRecommended drugs: {}\n",
            found.input,
            found.matched_symptom_disease.bold(),
            found.matched_formula_disease.bold(),
            found.drugs.join(", ").green()
        ),
        DrugLookupOutcome::NotInSymptomDataset { .. } => format!("{}\n", outcome.message().red()),
        DrugLookupOutcome::NoFormulaMatch { .. } | DrugLookupOutcome::NoDrugsListed { .. } => {
            format!("{}\n", outcome.message().yellow())
        }
    }
}

pub fn formula_search(search: &FormulaSearch) -> String {
    if let Some(message) = &search.message {
        return format!("{}\n", message.yellow());
    }

    let mut out = String::new();
    for formula in &search.formulas {
        let _ = writeln!(out, "{:>5.1}  {}", formula.score, formula.name);
    }
    let _ = writeln!(out, "{} formulas match '{}'", search.formulas.len(), search.query);
    out
}
