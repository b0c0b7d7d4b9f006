//! Domain-specific error types for account-brief

use thiserror::Error;

/// Main error type for the account-brief CLI
#[derive(Error, Debug)]
pub enum BriefError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("External service error: {message}")]
    ExternalService { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<std::io::Error> for BriefError {
    fn from(err: std::io::Error) -> Self {
        BriefError::Io {
            message: err.to_string(),
        }
    }
}

impl From<crate::llm::ChatError> for BriefError {
    fn from(err: crate::llm::ChatError) -> Self {
        BriefError::ExternalService {
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for BriefError {
    fn from(err: anyhow::Error) -> Self {
        BriefError::Internal {
            message: err.to_string(),
        }
    }
}

/// Result type alias for account-brief operations
pub type Result<T> = std::result::Result<T, BriefError>;
