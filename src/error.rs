//! Error types for the library manager

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not available: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Expected business outcomes are reported to the user as a single
    /// line and never terminate the program; everything else (I/O,
    /// malformed stored data, configuration) is fatal for the operation.
    pub fn is_reportable(&self) -> bool {
        matches!(self, AppError::NotFound(_) | AppError::Unavailable(_))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
