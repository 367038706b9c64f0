use futures::try_join;

use crate::modules::video::domain::{
    AudioVideoMedia, ImageMedia, MediaResourceGateway, Resource, Video, VideoId, VideoMediaType,
    VideoResource,
};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::TimedOperation;

/// Optional assets supplied with a create or update request
#[derive(Debug, Clone, Default)]
pub struct VideoResources {
    pub video: Option<Resource>,
    pub trailer: Option<Resource>,
    pub banner: Option<Resource>,
    pub thumbnail: Option<Resource>,
    pub thumbnail_half: Option<Resource>,
}

impl VideoResources {
    pub fn is_empty(&self) -> bool {
        self.video.is_none()
            && self.trailer.is_none()
            && self.banner.is_none()
            && self.thumbnail.is_none()
            && self.thumbnail_half.is_none()
    }
}

/// Media records produced by storing a `VideoResources`
#[derive(Debug, Default)]
pub struct StoredMedia {
    pub video: Option<AudioVideoMedia>,
    pub trailer: Option<AudioVideoMedia>,
    pub banner: Option<ImageMedia>,
    pub thumbnail: Option<ImageMedia>,
    pub thumbnail_half: Option<ImageMedia>,
}

impl StoredMedia {
    /// Set all five slots. A slot without a new asset is cleared.
    pub fn replace_on(self, video: &mut Video) {
        video
            .update_video_media(self.video)
            .update_trailer_media(self.trailer)
            .update_banner_media(self.banner)
            .update_thumbnail_media(self.thumbnail)
            .update_thumbnail_half_media(self.thumbnail_half);
    }

    /// Fill the slots that received a new asset, leaving the others as they are
    pub fn apply_to(self, video: &mut Video) {
        if let Some(media) = self.video {
            video.update_video_media(Some(media));
        }
        if let Some(media) = self.trailer {
            video.update_trailer_media(Some(media));
        }
        if let Some(media) = self.banner {
            video.update_banner_media(Some(media));
        }
        if let Some(media) = self.thumbnail {
            video.update_thumbnail_media(Some(media));
        }
        if let Some(media) = self.thumbnail_half {
            video.update_thumbnail_half_media(Some(media));
        }
    }
}

/// Store every supplied asset concurrently. Locations are disjoint per
/// media type, so the only ordering requirement is that all of them finish
/// before the aggregate is persisted.
pub async fn store_all(
    gateway: &dyn MediaResourceGateway,
    video_id: &VideoId,
    resources: VideoResources,
) -> AppResult<StoredMedia> {
    if resources.is_empty() {
        return Ok(StoredMedia::default());
    }

    let timer = TimedOperation::new(&format!("store media [videoId:{}]", video_id));

    let (video, trailer, banner, thumbnail, thumbnail_half) = try_join!(
        store_audio_video(gateway, video_id, VideoMediaType::Video, resources.video),
        store_audio_video(gateway, video_id, VideoMediaType::Trailer, resources.trailer),
        store_image(gateway, video_id, VideoMediaType::Banner, resources.banner),
        store_image(gateway, video_id, VideoMediaType::Thumbnail, resources.thumbnail),
        store_image(
            gateway,
            video_id,
            VideoMediaType::ThumbnailHalf,
            resources.thumbnail_half
        )
    )?;

    timer.finish();

    Ok(StoredMedia {
        video,
        trailer,
        banner,
        thumbnail,
        thumbnail_half,
    })
}

/// Store a single asset into the slot named by `media_type`
pub async fn store_one(
    gateway: &dyn MediaResourceGateway,
    video: &mut Video,
    media_type: VideoMediaType,
    resource: Resource,
) -> AppResult<()> {
    let video_id = video.id().clone();

    let mut stored = StoredMedia::default();
    match media_type {
        VideoMediaType::Video => {
            stored.video = store_audio_video(gateway, &video_id, media_type, Some(resource)).await?
        }
        VideoMediaType::Trailer => {
            stored.trailer =
                store_audio_video(gateway, &video_id, media_type, Some(resource)).await?
        }
        VideoMediaType::Banner => {
            stored.banner = store_image(gateway, &video_id, media_type, Some(resource)).await?
        }
        VideoMediaType::Thumbnail => {
            stored.thumbnail = store_image(gateway, &video_id, media_type, Some(resource)).await?
        }
        VideoMediaType::ThumbnailHalf => {
            stored.thumbnail_half =
                store_image(gateway, &video_id, media_type, Some(resource)).await?
        }
    }

    stored.apply_to(video);
    Ok(())
}

async fn store_audio_video(
    gateway: &dyn MediaResourceGateway,
    video_id: &VideoId,
    media_type: VideoMediaType,
    resource: Option<Resource>,
) -> AppResult<Option<AudioVideoMedia>> {
    match resource {
        Some(resource) => gateway
            .store_audio_video(video_id, VideoResource::with(media_type, resource))
            .await
            .map(Some),
        None => Ok(None),
    }
}

async fn store_image(
    gateway: &dyn MediaResourceGateway,
    video_id: &VideoId,
    media_type: VideoMediaType,
    resource: Option<Resource>,
) -> AppResult<Option<ImageMedia>> {
    match resource {
        Some(resource) => gateway
            .store_image(video_id, VideoResource::with(media_type, resource))
            .await
            .map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::video::application::mocks::MockMediaResourceGateway;
    use crate::modules::video::domain::{MediaStatus, VideoMetadata};
    use crate::shared::errors::AppError;

    fn resource(name: &str) -> Resource {
        Resource::with(name.as_bytes().to_vec(), "abc", "application/octet-stream", name)
    }

    fn storing_gateway() -> MockMediaResourceGateway {
        let mut gateway = MockMediaResourceGateway::new();
        gateway.expect_store_audio_video().returning(|id, resource| {
            Ok(AudioVideoMedia::new_stored(
                resource.resource().checksum(),
                resource.resource().name(),
                format!("videoId-{}/type-{}", id, resource.media_type()),
            ))
        });
        gateway.expect_store_image().returning(|id, resource| {
            Ok(ImageMedia::with(
                resource.resource().checksum(),
                resource.resource().name(),
                format!("videoId-{}/type-{}", id, resource.media_type()),
            ))
        });
        gateway
    }

    #[tokio::test]
    async fn test_store_all_fills_every_supplied_slot() {
        let gateway = storing_gateway();
        let mut video = Video::new_video(VideoMetadata::default());
        let resources = VideoResources {
            video: Some(resource("video.mp4")),
            trailer: Some(resource("trailer.mp4")),
            banner: Some(resource("banner.png")),
            thumbnail: Some(resource("thumb.png")),
            thumbnail_half: Some(resource("half.png")),
        };

        let video_id = video.id().clone();
        store_all(&gateway, &video_id, resources)
            .await
            .unwrap()
            .replace_on(&mut video);

        assert_eq!(video.video().unwrap().status(), MediaStatus::Pending);
        assert_eq!(
            video.trailer().unwrap().raw_location(),
            format!("videoId-{}/type-TRAILER", video_id)
        );
        assert_eq!(
            video.thumbnail_half().unwrap().location(),
            format!("videoId-{}/type-THUMBNAIL_HALF", video_id)
        );
        assert_eq!(video.pending_events().len(), 2);
    }

    #[tokio::test]
    async fn test_store_all_without_resources_never_touches_storage() {
        let mut gateway = MockMediaResourceGateway::new();
        gateway.expect_store_audio_video().never();
        gateway.expect_store_image().never();

        let stored = store_all(&gateway, &VideoId::from("v-1"), VideoResources::default())
            .await
            .unwrap();

        assert!(stored.video.is_none());
        assert!(stored.banner.is_none());
    }

    #[tokio::test]
    async fn test_store_all_fails_when_one_store_fails() {
        let mut gateway = MockMediaResourceGateway::new();
        gateway
            .expect_store_audio_video()
            .returning(|_, _| Err(AppError::StorageError("disk full".to_string())));
        gateway.expect_store_image().returning(|_, resource| {
            Ok(ImageMedia::with("abc", resource.resource().name(), "loc"))
        });

        let result = store_all(
            &gateway,
            &VideoId::from("v-1"),
            VideoResources {
                video: Some(resource("video.mp4")),
                banner: Some(resource("banner.png")),
                ..Default::default()
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::StorageError(_))));
    }

    #[tokio::test]
    async fn test_replace_on_clears_slots_without_new_asset() {
        let gateway = storing_gateway();
        let mut video = Video::new_video(VideoMetadata::default());
        let video_id = video.id().clone();

        store_all(
            &gateway,
            &video_id,
            VideoResources {
                video: Some(resource("video.mp4")),
                banner: Some(resource("banner.png")),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .replace_on(&mut video);
        video.pull_events();

        store_all(
            &gateway,
            &video_id,
            VideoResources {
                trailer: Some(resource("trailer.mp4")),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .replace_on(&mut video);

        assert!(video.video().is_none());
        assert!(video.banner().is_none());
        assert_eq!(video.trailer().unwrap().name(), "trailer.mp4");
        assert_eq!(video.pending_events().len(), 1);
    }

    #[tokio::test]
    async fn test_store_one_keeps_other_slots() {
        let gateway = storing_gateway();
        let mut video = Video::new_video(VideoMetadata::default());

        store_one(&gateway, &mut video, VideoMediaType::Video, resource("video.mp4"))
            .await
            .unwrap();
        store_one(&gateway, &mut video, VideoMediaType::Banner, resource("banner.png"))
            .await
            .unwrap();

        assert!(video.video().is_some());
        assert!(video.banner().is_some());
    }

    #[tokio::test]
    async fn test_store_one_fills_only_that_slot() {
        let gateway = storing_gateway();
        let mut video = Video::new_video(VideoMetadata::default());

        store_one(&gateway, &mut video, VideoMediaType::Banner, resource("banner.png"))
            .await
            .unwrap();

        assert!(video.banner().is_some());
        assert!(video.video().is_none());
        assert!(video.pending_events().is_empty());
    }
}
