use serde::{Deserialize, Serialize};

use crate::error::{LoggerError, LoggerResult};

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, for terminals and development
    Pretty,
    /// One JSON object per line, for log shipping
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub log_level: String,
    pub format: LogFormat,
    pub with_target: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Pretty,
            with_target: true,
        }
    }
}

impl LoggerConfig {
    /// Load logger configuration from environment variables
    pub fn from_env() -> LoggerResult<Self> {
        let defaults = Self::default();

        let log_level = std::env::var("MEDCON_LOG_LEVEL").unwrap_or(defaults.log_level);

        let format = match std::env::var("MEDCON_LOG_FORMAT") {
            Ok(value) => match value.to_lowercase().as_str() {
                "pretty" | "text" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                other => {
                    return Err(LoggerError::Config(format!("Unknown log format: {}", other)))
                }
            },
            Err(_) => defaults.format,
        };

        Ok(Self {
            log_level,
            format,
            with_target: defaults.with_target,
        })
    }

    /// Raise the level to `debug` when the caller asked for verbose output
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.log_level = "debug".to_string();
        }
        self
    }
}
