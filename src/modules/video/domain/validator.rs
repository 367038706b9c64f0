use super::aggregates::Video;
use crate::shared::errors::AppResult;
use crate::shared::validation::{ValidationError, ValidationHandler, Validator};

pub const TITLE_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 4000;

/// Field checks of the Video aggregate, run in a fixed order:
/// title, description, launchedAt, rating
pub struct VideoValidator<'a> {
    video: &'a Video,
}

impl<'a> VideoValidator<'a> {
    pub fn new(video: &'a Video) -> Self {
        Self { video }
    }

    fn check_text(
        handler: &mut dyn ValidationHandler,
        field: &str,
        value: &str,
        max: usize,
    ) -> AppResult<()> {
        let length = value.trim().chars().count();

        if length == 0 {
            return handler.append(ValidationError::new(format!(
                "'{}' should not be empty",
                field
            )));
        }

        if length > max {
            return handler.append(ValidationError::new(format!(
                "'{}' must be between 1 and {} characters",
                field, max
            )));
        }

        Ok(())
    }
}

impl Validator for VideoValidator<'_> {
    fn validate(&self, handler: &mut dyn ValidationHandler) -> AppResult<()> {
        Self::check_text(handler, "title", self.video.title(), TITLE_MAX_LENGTH)?;
        Self::check_text(
            handler,
            "description",
            self.video.description(),
            DESCRIPTION_MAX_LENGTH,
        )?;

        if self.video.launched_at().is_none() {
            handler.append(ValidationError::new("'launchedAt' should not be null"))?;
        }

        if self.video.rating().is_none() {
            handler.append(ValidationError::new("'rating' should not be null"))?;
        }

        Ok(())
    }
}
