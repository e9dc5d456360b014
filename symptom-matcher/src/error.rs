use error_common::MedconError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dataset load failure: {0}")]
    DatasetLoad(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

pub type MatcherResult<T> = Result<T, MatcherError>;

impl MatcherError {
    /// Errors the caller caused and can fix by changing the request
    pub fn is_client_error(&self) -> bool {
        matches!(self, MatcherError::InvalidInput(_))
    }
}

impl From<MatcherError> for MedconError {
    fn from(error: MatcherError) -> Self {
        match error {
            MatcherError::InvalidInput(msg) => MedconError::ValidationError(msg),
            MatcherError::DatasetLoad(msg) => MedconError::DatasetError(msg),
            err @ MatcherError::Csv(_) => MedconError::DatasetError(err.to_string()),
            MatcherError::Config(msg) => MedconError::ConfigError(msg),
            MatcherError::Classifier(msg) => MedconError::ExternalError(msg),
            err @ MatcherError::Network(_) => MedconError::ExternalError(err.to_string()),
        }
    }
}
