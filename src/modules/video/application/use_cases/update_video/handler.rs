use async_trait::async_trait;
use std::sync::Arc;

use crate::log_warn;
use crate::modules::video::application::{
    media_storage::{store_all, VideoResources},
    ports::EventPublisher,
    related_aggregates::RelatedAggregatesValidator,
};
use crate::modules::video::domain::{MediaResourceGateway, Video, VideoGateway, VideoId};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    utils::logger::LogContext,
    validation::Notification,
};

use super::{command::UpdateVideoCommand, result::UpdateVideoResult};

/// Use case handler for updating a video and storing any new assets
pub struct UpdateVideoHandler {
    video_gateway: Arc<dyn VideoGateway>,
    media_resource_gateway: Arc<dyn MediaResourceGateway>,
    related_aggregates: RelatedAggregatesValidator,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateVideoHandler {
    pub fn new(
        video_gateway: Arc<dyn VideoGateway>,
        media_resource_gateway: Arc<dyn MediaResourceGateway>,
        related_aggregates: RelatedAggregatesValidator,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            video_gateway,
            media_resource_gateway,
            related_aggregates,
            event_publisher,
        }
    }

    async fn store_and_update(&self, mut video: Video, resources: VideoResources) -> AppResult<Video> {
        store_all(self.media_resource_gateway.as_ref(), video.id(), resources)
            .await?
            .replace_on(&mut video);

        let events = video.pull_events();
        let updated = self.video_gateway.update(&video).await?;

        if let Err(e) = self.event_publisher.publish_all(events).await {
            log_warn!("Could not publish media events [videoId:{}]: {}", video.id(), e);
        }

        Ok(updated)
    }
}

#[async_trait]
impl UseCase<UpdateVideoCommand, UpdateVideoResult> for UpdateVideoHandler {
    async fn execute(&self, command: UpdateVideoCommand) -> AppResult<UpdateVideoResult> {
        let video_id = VideoId::from(command.id);

        let Some(mut video) = self.video_gateway.find_by_id(&video_id).await? else {
            return Err(AppError::not_found("Video", &video_id));
        };

        let metadata = command.fields.into_metadata();
        let mut notification = Notification::create();

        self.related_aggregates
            .validate(&metadata, &mut notification)
            .await?;
        video.update(metadata);
        video.validate(&mut notification)?;

        notification.into_result("Could not update Aggregate Video")?;

        match self.store_and_update(video, command.resources).await {
            Ok(updated) => {
                LogContext::use_case("update-video", updated.id().value(), None);
                Ok(UpdateVideoResult::new(updated.id().to_string()))
            }
            Err(cause) => {
                LogContext::use_case("update-video", video_id.value(), Some(&cause));
                Err(AppError::internal(
                    format!("An error on update video was observed [videoId:{}]", video_id),
                    cause,
                ))
            }
        }
    }
}
