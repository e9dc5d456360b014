use clap::{Parser, Subcommand};
use drug_lookup::{DEFAULT_SEARCH_LIMIT, DEFAULT_THRESHOLD};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "medcon")]
#[command(version, about = "Symptom matching and drug lookup for the MedCon services")]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Predict diseases from symptoms
    Predict {
        /// Symptom dataset (Disease, Symptoms, Treatments columns)
        #[arg(long, env = "MEDCON_DATASET")]
        dataset: PathBuf,

        /// Symptoms, one per argument
        #[arg(required = true)]
        symptoms: Vec<String>,
    },

    /// List diseases known to the symptom dataset
    Diseases {
        #[arg(long, env = "MEDCON_DATASET")]
        dataset: PathBuf,
    },

    /// Report dataset and classifier status
    Health {
        #[arg(long, env = "MEDCON_DATASET")]
        dataset: PathBuf,
    },

    /// Recommend drugs for a disease
    Drugs {
        /// Formulas dataset (Disease, Drug columns)
        #[arg(long, env = "MEDCON_FORMULAS")]
        formulas: PathBuf,

        #[arg(long, env = "MEDCON_DATASET")]
        symptom_dataset: PathBuf,

        /// Minimum similarity for both disease lookups
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        disease: String,
    },

    /// Fuzzy search over drug names
    SearchFormulas {
        #[arg(long, env = "MEDCON_FORMULAS")]
        formulas: PathBuf,

        #[arg(long, env = "MEDCON_DATASET")]
        symptom_dataset: PathBuf,

        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,

        query: String,
    },
}
