use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::domain::{MediaStatus, VideoGateway, VideoId, VideoMediaType};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    utils::logger::LogContext,
};
use crate::{log_debug, log_warn};

use super::{command::UpdateMediaStatusCommand, result::UpdateMediaStatusResult};

/// Applies an encoder verdict to the matching audio/video slot
///
/// Deliveries are at-least-once and unordered: a deleted video or a stale
/// resource id is a no-op, and a late `PROCESSING` overwrites `COMPLETED`.
pub struct UpdateMediaStatusHandler {
    video_gateway: Arc<dyn VideoGateway>,
}

impl UpdateMediaStatusHandler {
    pub fn new(video_gateway: Arc<dyn VideoGateway>) -> Self {
        Self { video_gateway }
    }
}

/// Encoded location for a completed asset, `None` for processing
fn encoded_path(command: &UpdateMediaStatusCommand) -> AppResult<Option<String>> {
    match (command.folder.as_deref(), command.filename.as_deref()) {
        (Some(folder), Some(filename)) => Ok(Some(format!("{}/{}", folder, filename))),
        _ => Err(AppError::InvalidInput(format!(
            "A completed media update requires folder and filename [resourceId:{}]",
            command.resource_id
        ))),
    }
}

#[async_trait]
impl UseCase<UpdateMediaStatusCommand, UpdateMediaStatusResult> for UpdateMediaStatusHandler {
    async fn execute(&self, command: UpdateMediaStatusCommand) -> AppResult<UpdateMediaStatusResult> {
        let encoded = match command.status {
            MediaStatus::Completed => encoded_path(&command)?,
            MediaStatus::Processing => None,
            other => {
                log_debug!(
                    "Ignoring media status {} [videoId:{}] [resourceId:{}]",
                    other,
                    command.video_id,
                    command.resource_id
                );
                return Ok(UpdateMediaStatusResult::Ignored(other));
            }
        };

        let video_id = VideoId::from(command.video_id);

        let Some(mut video) = self.video_gateway.find_by_id(&video_id).await? else {
            log_warn!(
                "Media status for a missing video [videoId:{}] [resourceId:{}]",
                video_id,
                command.resource_id
            );
            return Ok(UpdateMediaStatusResult::VideoNotFound);
        };

        let matches = |media_type: VideoMediaType| {
            video
                .audio_video(media_type)
                .is_some_and(|media| media.id() == command.resource_id)
        };

        let Some(media_type) = [VideoMediaType::Video, VideoMediaType::Trailer]
            .into_iter()
            .find(|t| matches(*t))
        else {
            log_warn!(
                "No media matches [videoId:{}] [resourceId:{}]",
                video_id,
                command.resource_id
            );
            return Ok(UpdateMediaStatusResult::NoMatchingMedia);
        };

        match encoded {
            Some(path) => video.completed(media_type, &path),
            None => video.processing(media_type),
        };

        self.video_gateway.update(&video).await?;

        LogContext::use_case("update-media-status", video_id.value(), None);

        Ok(UpdateMediaStatusResult::Applied(media_type))
    }
}
