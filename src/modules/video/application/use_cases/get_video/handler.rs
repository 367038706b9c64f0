use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::domain::{VideoGateway, VideoId};
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::{query::GetVideoQuery, result::GetVideoResult};

/// Query handler for loading a video by id
pub struct GetVideoHandler {
    video_gateway: Arc<dyn VideoGateway>,
}

impl GetVideoHandler {
    pub fn new(video_gateway: Arc<dyn VideoGateway>) -> Self {
        Self { video_gateway }
    }
}

#[async_trait]
impl Query<GetVideoQuery, GetVideoResult> for GetVideoHandler {
    async fn execute(&self, query: GetVideoQuery) -> AppResult<GetVideoResult> {
        let id = VideoId::from(query.id);

        self.video_gateway
            .find_by_id(&id)
            .await?
            .map(|video| GetVideoResult::from(&video))
            .ok_or_else(|| AppError::not_found("Video", &id))
    }
}
