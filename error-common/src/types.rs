use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codes;

/// Workspace-wide error enum used at service and binary boundaries
#[derive(Error, Debug)]
pub enum MedconError {
    /// Caller supplied unusable input (client error)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Reference data could not be loaded; the service must not start
    #[error("Dataset error: {0}")]
    DatasetError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// External collaborator errors
    #[error("External service error: {0}")]
    ExternalError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Whether an error is the caller's fault or the service's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    Client,
    Server,
}

impl MedconError {
    /// Stable error code for API responses and log correlation
    pub fn code(&self) -> &'static str {
        match self {
            MedconError::ValidationError(_) => codes::validation::INVALID_INPUT,
            MedconError::DatasetError(_) => codes::dataset::LOAD_FAILED,
            MedconError::ConfigError(_) => codes::configuration::INVALID_VALUE,
            MedconError::ExternalError(_) => codes::external::CLASSIFIER_UNAVAILABLE,
            MedconError::InternalError(_) => codes::internal::UNEXPECTED,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            MedconError::ValidationError(_) => ErrorClass::Client,
            _ => ErrorClass::Server,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.class() == ErrorClass::Client
    }
}

/// Serializable error payload for machine-readable output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub class: ErrorClass,
    pub message: String,
}

impl From<&MedconError> for ErrorResponse {
    fn from(error: &MedconError) -> Self {
        Self {
            code: error.code().to_string(),
            class: error.class(),
            message: error.to_string(),
        }
    }
}

/// Result type alias for MedCon operations
pub type Result<T> = std::result::Result<T, MedconError>;

/// Log an error with its code and class attached
pub fn log_error(context: &str, error: &MedconError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        client_error = error.is_client_error(),
        error = %error,
        "MedCon error occurred"
    );
}
