use super::notification::{Notification, ValidationError};
use crate::shared::errors::{AppError, AppResult};

/// Sink for validation failures.
///
/// Validators report through `append` and propagate its result with `?`:
/// an accumulating handler always returns `Ok`, so every check runs, while
/// a fail-fast handler returns `Err` on the first failure.
pub trait ValidationHandler {
    fn append(&mut self, error: ValidationError) -> AppResult<()>;

    fn errors(&self) -> &[ValidationError];

    fn append_all(&mut self, other: Notification) -> AppResult<()> {
        for error in other.into_errors() {
            self.append(error)?;
        }
        Ok(())
    }

    fn has_error(&self) -> bool {
        !self.errors().is_empty()
    }
}

/// Field checks for one aggregate type
pub trait Validator {
    fn validate(&self, handler: &mut dyn ValidationHandler) -> AppResult<()>;
}

/// Fails on the first appended error
#[derive(Debug, Default, Clone, Copy)]
pub struct ThrowsValidationHandler;

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> AppResult<()> {
        Err(AppError::Notification {
            message: error.message.clone(),
            errors: vec![error],
        })
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }
}
