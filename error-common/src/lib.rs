//! Common error handling utilities for the MedCon services
//!
//! Every crate in the workspace keeps its own `thiserror` enum for the
//! failures it knows about and converts into [`MedconError`] at the
//! boundary where a caller (or the `medcon` binary) needs one type.
//!
//! # Error Categories
//!
//! - **ValidationError**: empty or malformed caller input, a client error
//! - **DatasetError**: reference tables failed to load, fatal at start-up
//! - **ConfigError**: invalid environment or CLI configuration
//! - **ExternalError**: a collaborator (classifier, inference endpoint) failed
//! - **InternalError**: anything else
//!
//! # Example
//!
//! ```rust
//! use error_common::{MedconError, Result};
//!
//! fn require_symptoms(symptoms: &[String]) -> Result<()> {
//!     if symptoms.iter().all(|s| s.trim().is_empty()) {
//!         return Err(MedconError::ValidationError(
//!             "At least one symptom is required".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = require_symptoms(&[" ".to_string()]).unwrap_err();
//! assert!(err.is_client_error());
//! assert_eq!(err.code(), "VALIDATION_1001");
//! ```

pub mod types;
pub mod codes;

pub use types::*;
pub use codes::*;
