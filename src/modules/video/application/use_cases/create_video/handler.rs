use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::application::{
    media_storage::{store_all, VideoResources},
    ports::EventPublisher,
    related_aggregates::RelatedAggregatesValidator,
};
use crate::modules::video::domain::{MediaResourceGateway, Video, VideoGateway};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    utils::logger::LogContext,
    validation::Notification,
};
use crate::{log_error, log_warn};

use super::{command::CreateVideoCommand, result::CreateVideoResult};

/// Use case handler for creating a video and storing its assets
pub struct CreateVideoHandler {
    video_gateway: Arc<dyn VideoGateway>,
    media_resource_gateway: Arc<dyn MediaResourceGateway>,
    related_aggregates: RelatedAggregatesValidator,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateVideoHandler {
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

    async fn store_and_create(&self, mut video: Video, resources: VideoResources) -> AppResult<Video> {
        store_all(self.media_resource_gateway.as_ref(), video.id(), resources)
            .await?
            .replace_on(&mut video);

        let events = video.pull_events();
        let created = self.video_gateway.create(&video).await?;

        if let Err(e) = self.event_publisher.publish_all(events).await {
            log_warn!("Could not publish media events [videoId:{}]: {}", video.id(), e);
        }

        Ok(created)
    }
}

#[async_trait]
impl UseCase<CreateVideoCommand, CreateVideoResult> for CreateVideoHandler {
    async fn execute(&self, command: CreateVideoCommand) -> AppResult<CreateVideoResult> {
        let metadata = command.fields.into_metadata();
        let mut notification = Notification::create();

        // Existence checks and field checks report together
        self.related_aggregates
            .validate(&metadata, &mut notification)
            .await?;
        let video = Video::new_video(metadata);
        video.validate(&mut notification)?;

        notification.into_result("Could not create Aggregate Video")?;

        let video_id = video.id().clone();

        match self.store_and_create(video, command.resources).await {
            Ok(created) => {
                LogContext::use_case("create-video", created.id().value(), None);
                Ok(CreateVideoResult::new(created.id().to_string()))
            }
            Err(cause) => {
                LogContext::use_case("create-video", video_id.value(), Some(&cause));

                // The video was never persisted, so nothing references the
                // assets stored for it. Clearing them is the failed-creation
                // cleanup of MediaResourceGateway::clear_resources.
                if let Err(e) = self.media_resource_gateway.clear_resources(&video_id).await {
                    log_error!("Could not clear resources [videoId:{}]: {}", video_id, e);
                }

                Err(AppError::internal(
                    format!("An error on create video was observed [videoId:{}]", video_id),
                    cause,
                ))
            }
        }
    }
}
