use serde::Serialize;

use crate::modules::video::domain::VideoMediaType;

/// Result of uploading an asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMediaResult {
    pub video_id: String,
    pub media_type: VideoMediaType,
}

impl UploadMediaResult {
    pub fn new(video_id: String, media_type: VideoMediaType) -> Self {
        Self {
            video_id,
            media_type,
        }
    }
}
