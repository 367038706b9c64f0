use async_trait::async_trait;
use std::sync::Arc;

use crate::log_warn;
use crate::modules::video::application::{media_storage::store_one, ports::EventPublisher};
use crate::modules::video::domain::{MediaResourceGateway, VideoGateway, VideoId};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    utils::logger::LogContext,
};

use super::{command::UploadMediaCommand, result::UploadMediaResult};

/// Use case handler for storing a single asset of an existing video
pub struct UploadMediaHandler {
    video_gateway: Arc<dyn VideoGateway>,
    media_resource_gateway: Arc<dyn MediaResourceGateway>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UploadMediaHandler {
    pub fn new(
        video_gateway: Arc<dyn VideoGateway>,
        media_resource_gateway: Arc<dyn MediaResourceGateway>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            video_gateway,
            media_resource_gateway,
            event_publisher,
        }
    }
}

#[async_trait]
impl UseCase<UploadMediaCommand, UploadMediaResult> for UploadMediaHandler {
    async fn execute(&self, command: UploadMediaCommand) -> AppResult<UploadMediaResult> {
        let video_id = VideoId::from(command.video_id);

        let Some(mut video) = self.video_gateway.find_by_id(&video_id).await? else {
            return Err(AppError::not_found("Video", &video_id));
        };

        store_one(
            self.media_resource_gateway.as_ref(),
            &mut video,
            command.media_type,
            command.resource,
        )
        .await?;

        let events = video.pull_events();
        self.video_gateway.update(&video).await?;

        if let Err(e) = self.event_publisher.publish_all(events).await {
            log_warn!("Could not publish media events [videoId:{}]: {}", video_id, e);
        }

        LogContext::use_case("upload-media", video_id.value(), None);

        Ok(UploadMediaResult::new(video_id.to_string(), command.media_type))
    }
}
