//! Structured logging with PHI redaction for the MedCon services
//!
//! Symptom lists, free-text complaints and anything a patient types are
//! protected health information. This crate owns the two pieces every
//! service needs so that none of that text reaches a log sink:
//!
//! - [`init_logging`] installs the `tracing` subscriber (pretty or JSON,
//!   filtered through `RUST_LOG` / [`LoggerConfig::log_level`])
//! - [`PiiRedactor`] scrubs e-mails, phone numbers and SSNs out of text and
//!   produces order-independent correlation hashes for symptom sets
//!
//! # Example
//!
//! ```rust
//! use logger_redacted::{PiiRedactor, RedactionConfig};
//!
//! let redactor = PiiRedactor::new(RedactionConfig::default());
//! let query_hash = redactor.correlation_hash(&["fever", "cough"]);
//! tracing::info!(query_hash = %query_hash, "Scoring symptom query");
//! ```

pub mod config;
pub mod error;
pub mod redactor;
pub mod subscriber;

pub use config::*;
pub use error::*;
pub use redactor::*;
pub use subscriber::*;
