use std::result::Result as StdResult;

use chrono::NaiveDate;
use thiserror::Error;

/// Error type shared by the ledger boundary, configuration and scenario layers.
#[derive(Debug, Error)]
pub enum StoryError {
    #[error("Invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
    #[error("Unknown preset `{name}`{}", suggestion_suffix(.suggestion))]
    UnknownPreset {
        name: String,
        suggestion: Option<String>,
    },
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Malformed ledger row at line {line}: {message}")]
    ParseError { line: usize, message: String },
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Amount overflow in {component} at {date}")]
    Overflow {
        component: &'static str,
        date: NaiveDate,
    },
}

pub type Result<T> = StdResult<T, StoryError>;

impl StoryError {
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        StoryError::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }

    pub fn overflow(component: &'static str, date: NaiveDate) -> Self {
        StoryError::Overflow { component, date }
    }
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|name| format!(" (did you mean `{}`?)", name))
        .unwrap_or_default()
}

impl From<std::io::Error> for StoryError {
    fn from(err: std::io::Error) -> Self {
        StoryError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for StoryError {
    fn from(err: serde_json::Error) -> Self {
        StoryError::ConfigError(err.to_string())
    }
}

impl From<csv::Error> for StoryError {
    fn from(err: csv::Error) -> Self {
        let line = err
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or_default();
        StoryError::ParseError {
            line,
            message: err.to_string(),
        }
    }
}
