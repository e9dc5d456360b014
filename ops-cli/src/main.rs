//! `medcon` operator CLI
//!
//! Usage:
//!   medcon predict --dataset data/diseases.csv fever "dry cough"
//!   medcon drugs --formulas data/formulas.csv --symptom-dataset data/diseases.csv malaria
//!   medcon search-formulas --formulas data/formulas.csv --symptom-dataset data/diseases.csv para
//!
//! Dataset paths fall back to `MEDCON_DATASET` / `MEDCON_FORMULAS`; a `.env`
//! file in the working directory is loaded first.

mod cli;
mod commands;
mod render;

use clap::Parser;
use colored::Colorize;
use error_common::log_error;
use logger_redacted::{init_logging, LoggerConfig};
use std::process::ExitCode;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let json = cli.json;

    let logging = LoggerConfig::from_env()
        .map(|config| config.verbose(cli.verbose))
        .and_then(|config| init_logging(&config));
    if let Err(err) = logging {
        eprintln!("{} {}", "warning:".yellow().bold(), err);
    }

    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error("medcon", &err);
            commands::report_error(json, &err);
            if err.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
