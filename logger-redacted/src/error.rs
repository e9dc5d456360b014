use error_common::MedconError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Logger configuration error: {0}")]
    Config(String),

    #[error("Failed to install log subscriber: {0}")]
    Init(String),
}

pub type LoggerResult<T> = Result<T, LoggerError>;

impl From<LoggerError> for MedconError {
    fn from(error: LoggerError) -> Self {
        MedconError::ConfigError(error.to_string())
    }
}
