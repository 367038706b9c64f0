use crate::modules::video::application::{media_storage::VideoResources, video_fields::VideoFields};

/// Command for replacing a video's metadata and, optionally, some of its assets
#[derive(Debug, Clone, Default)]
pub struct UpdateVideoCommand {
    pub id: String,
    pub fields: VideoFields,
    /// Absent resources leave the current slot untouched
    pub resources: VideoResources,
}

impl UpdateVideoCommand {
    pub fn new(id: impl Into<String>, fields: VideoFields, resources: VideoResources) -> Self {
        Self {
            id: id.into(),
            fields,
            resources,
        }
    }
}
