//! Drug recommendation lookup for the MedCon medication assistant
//!
//! A disease name typed by a clinician is resolved in two fuzzy steps:
//! first against the diseases of the symptom dataset, then against the
//! diseases of the formulas dataset, whose drugs are returned.
//!
//! ```rust,no_run
//! use drug_lookup::{DrugLookupService, DEFAULT_THRESHOLD};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = DrugLookupService::from_paths(
//!     Path::new("data/formulas.csv"),
//!     Path::new("data/diseases.csv"),
//! )?;
//! let outcome = service.lookup("malaria", DEFAULT_THRESHOLD)?;
//! println!("{}", outcome.message());
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod error;
pub mod lookup;

pub use dataset::FormulaRow;
pub use error::*;
pub use lookup::*;
