use crate::modules::video::domain::{Resource, VideoMediaType};

/// Command for attaching one asset to an existing video
#[derive(Debug, Clone)]
pub struct UploadMediaCommand {
    pub video_id: String,
    pub media_type: VideoMediaType,
    pub resource: Resource,
}

impl UploadMediaCommand {
    pub fn new(video_id: impl Into<String>, media_type: VideoMediaType, resource: Resource) -> Self {
        Self {
            video_id: video_id.into(),
            media_type,
            resource,
        }
    }
}
