use async_trait::async_trait;

use crate::modules::video::domain::{
    identifiers::VideoId,
    value_objects::{AudioVideoMedia, ImageMedia, Resource, VideoMediaType, VideoResource},
};
use crate::shared::errors::AppResult;

/// Storage boundary for the binary assets of a video
///
/// Locations are deterministic in `(video id, media type)`, so storing the
/// same slot twice overwrites the previous bytes.
#[async_trait]
pub trait MediaResourceGateway: Send + Sync {
    /// Store a video or trailer, returning a fresh `PENDING` media record
    async fn store_audio_video(
        &self,
        video_id: &VideoId,
        resource: VideoResource,
    ) -> AppResult<AudioVideoMedia>;

    async fn store_image(&self, video_id: &VideoId, resource: VideoResource)
        -> AppResult<ImageMedia>;

    async fn get_resource(
        &self,
        video_id: &VideoId,
        media_type: VideoMediaType,
    ) -> AppResult<Option<Resource>>;

    /// Delete everything stored under this video's folder, after the video
    /// is deleted or when its creation failed
    async fn clear_resources(&self, video_id: &VideoId) -> AppResult<()>;
}
