use async_trait::async_trait;
use std::sync::Arc;

use super::storage_service::StorageService;
use crate::modules::video::domain::{
    AudioVideoMedia, ImageMedia, MediaResourceGateway, Resource, VideoId, VideoMediaType,
    VideoResource,
};
use crate::shared::config::StorageConfig;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;

/// Media gateway over any `StorageService`
///
/// A video's assets live in one folder derived from the location pattern,
/// one file per media type derived from the filename pattern, e.g.
/// `videoId-{id}/type-VIDEO`.
pub struct DefaultMediaResourceGateway {
    storage: Arc<dyn StorageService>,
    location_pattern: String,
    filename_pattern: String,
}

impl DefaultMediaResourceGateway {
    pub fn new(storage: Arc<dyn StorageService>, config: &StorageConfig) -> Self {
        Self {
            storage,
            location_pattern: config.location_pattern.clone(),
            filename_pattern: config.filename_pattern.clone(),
        }
    }

    fn folder(&self, video_id: &VideoId) -> String {
        self.location_pattern.replace("{videoId}", video_id.value())
    }

    fn filename(&self, media_type: VideoMediaType) -> String {
        self.filename_pattern.replace("{type}", media_type.as_str())
    }

    pub fn location(&self, video_id: &VideoId, media_type: VideoMediaType) -> String {
        format!("{}/{}", self.folder(video_id), self.filename(media_type))
    }

    async fn store(&self, video_id: &VideoId, resource: &VideoResource) -> AppResult<String> {
        let location = self.location(video_id, resource.media_type());
        self.storage.store(&location, resource.resource()).await?;

        LogContext::storage_operation("store", &location, Some(resource.resource().content().len()));
        Ok(location)
    }
}

#[async_trait]
impl MediaResourceGateway for DefaultMediaResourceGateway {
    async fn store_audio_video(
        &self,
        video_id: &VideoId,
        resource: VideoResource,
    ) -> AppResult<AudioVideoMedia> {
        let location = self.store(video_id, &resource).await?;
        let resource = resource.into_resource();

        Ok(AudioVideoMedia::new_stored(
            resource.checksum(),
            resource.name(),
            location,
        ))
    }

    async fn store_image(
        &self,
        video_id: &VideoId,
        resource: VideoResource,
    ) -> AppResult<ImageMedia> {
        let location = self.store(video_id, &resource).await?;
        let resource = resource.into_resource();

        Ok(ImageMedia::with(resource.checksum(), resource.name(), location))
    }

    async fn get_resource(
        &self,
        video_id: &VideoId,
        media_type: VideoMediaType,
    ) -> AppResult<Option<Resource>> {
        self.storage.get(&self.location(video_id, media_type)).await
    }

    async fn clear_resources(&self, video_id: &VideoId) -> AppResult<()> {
        let prefix = format!("{}/", self.folder(video_id));
        let locations = self.storage.list(&prefix).await?;

        self.storage.delete_all(&locations).await?;

        LogContext::storage_operation("clear", &prefix, None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::video::domain::MediaStatus;
    use crate::modules::video::infrastructure::storage::InMemoryStorageService;

    fn gateway() -> (DefaultMediaResourceGateway, InMemoryStorageService) {
        let storage = InMemoryStorageService::new();
        let gateway =
            DefaultMediaResourceGateway::new(Arc::new(storage.clone()), &StorageConfig::default());
        (gateway, storage)
    }

    fn video_resource(media_type: VideoMediaType) -> VideoResource {
        VideoResource::with(
            media_type,
            Resource::with(vec![1, 2], "abc", "application/octet-stream", "file.bin"),
        )
    }

    #[tokio::test]
    async fn test_store_audio_video_uses_deterministic_location() {
        let (gateway, _) = gateway();
        let id = VideoId::from("123");

        let media = gateway
            .store_audio_video(&id, video_resource(VideoMediaType::Video))
            .await
            .unwrap();

        assert_eq!(media.raw_location(), "videoId-123/type-VIDEO");
        assert_eq!(media.status(), MediaStatus::Pending);
        assert_eq!(media.checksum(), "abc");
        assert!(media.encoded_location().is_empty());
    }

    #[tokio::test]
    async fn test_store_image_and_get_back() {
        let (gateway, _) = gateway();
        let id = VideoId::from("123");

        let image = gateway
            .store_image(&id, video_resource(VideoMediaType::ThumbnailHalf))
            .await
            .unwrap();
        let stored = gateway
            .get_resource(&id, VideoMediaType::ThumbnailHalf)
            .await
            .unwrap();

        assert_eq!(image.location(), "videoId-123/type-THUMBNAIL_HALF");
        assert_eq!(stored.map(|r| r.content().to_vec()), Some(vec![1, 2]));
        assert!(gateway
            .get_resource(&id, VideoMediaType::Banner)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_clear_resources_only_touches_that_video() {
        let (gateway, storage) = gateway();
        let first = VideoId::from("1");
        let second = VideoId::from("12");

        gateway.store_image(&first, video_resource(VideoMediaType::Banner)).await.unwrap();
        gateway.store_audio_video(&first, video_resource(VideoMediaType::Trailer)).await.unwrap();
        gateway.store_image(&second, video_resource(VideoMediaType::Banner)).await.unwrap();

        gateway.clear_resources(&first).await.unwrap();

        assert_eq!(storage.len(), 1);
        assert!(gateway
            .get_resource(&second, VideoMediaType::Banner)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_custom_patterns() {
        let config = StorageConfig {
            location_pattern: "videos/{videoId}".to_string(),
            filename_pattern: "{type}.bin".to_string(),
            ..StorageConfig::default()
        };
        let gateway =
            DefaultMediaResourceGateway::new(Arc::new(InMemoryStorageService::new()), &config);

        assert_eq!(
            gateway.location(&VideoId::from("9"), VideoMediaType::Trailer),
            "videos/9/TRAILER.bin"
        );
    }
}
