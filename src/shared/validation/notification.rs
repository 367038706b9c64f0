use serde::{Deserialize, Serialize};

use super::handler::ValidationHandler;
use crate::shared::errors::{AppError, AppResult};

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Collects every validation failure of an operation instead of stopping at
/// the first one. Inspected by the caller once all checks have run.
#[derive(Debug, Clone, Default)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn with_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// `Ok(())` when nothing was collected, otherwise a single
    /// `AppError::Notification` carrying every error in order.
    pub fn into_result(self, message: &str) -> AppResult<()> {
        if self.errors.is_empty() {
            return Ok(());
        }

        Err(AppError::Notification {
            message: message.to_string(),
            errors: self.errors,
        })
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> AppResult<()> {
        self.errors.push(error);
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}
