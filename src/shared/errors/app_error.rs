use serde::Serialize;
use thiserror::Error;

use crate::shared::validation::ValidationError;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Every validation problem found in one pass, in the order the checks ran.
    #[error("{message}")]
    Notification {
        message: String,
        errors: Vec<ValidationError>,
    },

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl AppError {
    /// Wrap a failure that happened after validation already passed.
    pub fn internal(context: impl Into<String>, cause: AppError) -> Self {
        AppError::InternalError(format!("{} caused by: {}", context.into(), cause))
    }

    pub fn not_found(aggregate: &str, id: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("{} with ID {} was not found", aggregate, id))
    }

    /// Validation errors carried by this error, empty for every other kind.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            AppError::Notification { errors, .. } => errors,
            _ => &[],
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
