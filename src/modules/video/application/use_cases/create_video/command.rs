use crate::modules::video::application::{media_storage::VideoResources, video_fields::VideoFields};

/// Command for creating a new video
#[derive(Debug, Clone, Default)]
pub struct CreateVideoCommand {
    pub fields: VideoFields,
    pub resources: VideoResources,
}

impl CreateVideoCommand {
    pub fn new(fields: VideoFields, resources: VideoResources) -> Self {
        Self { fields, resources }
    }
}
