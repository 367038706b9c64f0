use crate::shared::domain::identifier::identifier;

identifier!(
    /// Identifier of a video
    VideoId
);
