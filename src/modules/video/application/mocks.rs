//! Gateway doubles shared by the use case unit tests
use async_trait::async_trait;
use mockall::mock;

use super::ports::EventPublisher;
use crate::modules::catalog::domain::{
    CastMemberGateway, CastMemberId, CategoryGateway, CategoryId, GenreGateway, GenreId,
};
use crate::modules::video::domain::{
    AudioVideoMedia, ImageMedia, MediaResourceGateway, Resource, Video, VideoGateway, VideoId,
    VideoMediaCreated, VideoMediaType, VideoResource, VideoSearchQuery,
};
use crate::shared::application::PaginatedResult;
use crate::shared::errors::AppResult;

mock! {
    pub VideoGateway {}

    #[async_trait]
    impl VideoGateway for VideoGateway {
        async fn create(&self, video: &Video) -> AppResult<Video>;
        async fn update(&self, video: &Video) -> AppResult<Video>;
        async fn find_by_id(&self, id: &VideoId) -> AppResult<Option<Video>>;
        async fn delete_by_id(&self, id: &VideoId) -> AppResult<()>;
        async fn find_all(&self, query: &VideoSearchQuery) -> AppResult<PaginatedResult<Video>>;
    }
}

mock! {
    pub MediaResourceGateway {}

    #[async_trait]
    impl MediaResourceGateway for MediaResourceGateway {
        async fn store_audio_video(&self, video_id: &VideoId, resource: VideoResource) -> AppResult<AudioVideoMedia>;
        async fn store_image(&self, video_id: &VideoId, resource: VideoResource) -> AppResult<ImageMedia>;
        async fn get_resource(&self, video_id: &VideoId, media_type: VideoMediaType) -> AppResult<Option<Resource>>;
        async fn clear_resources(&self, video_id: &VideoId) -> AppResult<()>;
    }
}

mock! {
    pub EventPublisher {}

    #[async_trait]
    impl EventPublisher for EventPublisher {
        async fn publish_all(&self, events: Vec<VideoMediaCreated>) -> AppResult<()>;
    }
}

mock! {
    pub CategoryGateway {}

    #[async_trait]
    impl CategoryGateway for CategoryGateway {
        async fn exists_by_ids(&self, ids: &[CategoryId]) -> AppResult<Vec<CategoryId>>;
    }
}

mock! {
    pub GenreGateway {}

    #[async_trait]
    impl GenreGateway for GenreGateway {
        async fn exists_by_ids(&self, ids: &[GenreId]) -> AppResult<Vec<GenreId>>;
    }
}

mock! {
    pub CastMemberGateway {}

    #[async_trait]
    impl CastMemberGateway for CastMemberGateway {
        async fn exists_by_ids(&self, ids: &[CastMemberId]) -> AppResult<Vec<CastMemberId>>;
    }
}

/// Gateways that must never be asked anything
pub fn untouched_catalog() -> (MockCategoryGateway, MockGenreGateway, MockCastMemberGateway) {
    let mut categories = MockCategoryGateway::new();
    categories.expect_exists_by_ids().never();
    let mut genres = MockGenreGateway::new();
    genres.expect_exists_by_ids().never();
    let mut cast_members = MockCastMemberGateway::new();
    cast_members.expect_exists_by_ids().never();
    (categories, genres, cast_members)
}
