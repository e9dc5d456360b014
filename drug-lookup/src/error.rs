use error_common::MedconError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrugLookupError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dataset load failure: {0}")]
    DatasetLoad(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type DrugLookupResult<T> = Result<T, DrugLookupError>;

impl From<DrugLookupError> for MedconError {
    fn from(error: DrugLookupError) -> Self {
        match error {
            DrugLookupError::InvalidInput(msg) => MedconError::ValidationError(msg),
            DrugLookupError::DatasetLoad(msg) => MedconError::DatasetError(msg),
            err @ DrugLookupError::Csv(_) => MedconError::DatasetError(err.to_string()),
        }
    }
}
