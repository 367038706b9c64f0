/// Validation kernel shared by every aggregate
///
/// Aggregates expose `validate(handler)`; a dedicated `Validator` runs all of
/// its field checks against the same handler.
mod handler;
mod notification;

pub use handler::{ThrowsValidationHandler, ValidationHandler, Validator};
pub use notification::{Notification, ValidationError};
