use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::domain::{MediaResourceGateway, VideoId, VideoMediaType};
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::{query::GetMediaQuery, result::GetMediaResult};

/// Query handler for downloading a stored asset
pub struct GetMediaHandler {
    media_resource_gateway: Arc<dyn MediaResourceGateway>,
}

impl GetMediaHandler {
    pub fn new(media_resource_gateway: Arc<dyn MediaResourceGateway>) -> Self {
        Self {
            media_resource_gateway,
        }
    }
}

#[async_trait]
impl Query<GetMediaQuery, GetMediaResult> for GetMediaHandler {
    async fn execute(&self, query: GetMediaQuery) -> AppResult<GetMediaResult> {
        let Some(media_type) = VideoMediaType::of(&query.media_type) else {
            return Err(AppError::NotFound(format!(
                "Media type {} doesn't exists",
                query.media_type
            )));
        };

        let video_id = VideoId::from(query.video_id);

        self.media_resource_gateway
            .get_resource(&video_id, media_type)
            .await?
            .map(GetMediaResult::from)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Resource {} not found for video {}",
                    media_type, video_id
                ))
            })
    }
}
