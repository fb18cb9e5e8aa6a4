//! Error types for daybook.

use thiserror::Error;

/// Errors that can occur in daybook operations.
#[derive(Error, Debug)]
pub enum DaybookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Entry content must not be empty")]
    EmptyContent,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DaybookError {
    fn from(e: serde_json::Error) -> Self {
        DaybookError::Serialization(e.to_string())
    }
}

/// Result type alias for daybook operations.
pub type DaybookResult<T> = Result<T, DaybookError>;
