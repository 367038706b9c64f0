use crate::modules::video::domain::MediaStatus;

/// Encoder verdict for one audio/video asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMediaStatusCommand {
    pub status: MediaStatus,
    pub video_id: String,
    /// Id of the media record, not of the video
    pub resource_id: String,
    pub folder: Option<String>,
    pub filename: Option<String>,
}

impl UpdateMediaStatusCommand {
    pub fn completed(
        video_id: impl Into<String>,
        resource_id: impl Into<String>,
        folder: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            status: MediaStatus::Completed,
            video_id: video_id.into(),
            resource_id: resource_id.into(),
            folder: Some(folder.into()),
            filename: Some(filename.into()),
        }
    }

    pub fn processing(video_id: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            status: MediaStatus::Processing,
            video_id: video_id.into(),
            resource_id: resource_id.into(),
            folder: None,
            filename: None,
        }
    }
}
