use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::domain::{MediaResourceGateway, VideoGateway, VideoId};
use crate::shared::{application::use_case::UseCase, errors::AppResult, utils::logger::LogContext};

use super::command::DeleteVideoCommand;

/// Use case handler for deleting a video. Unknown ids are not an error.
pub struct DeleteVideoHandler {
    video_gateway: Arc<dyn VideoGateway>,
    media_resource_gateway: Arc<dyn MediaResourceGateway>,
}

impl DeleteVideoHandler {
    pub fn new(
        video_gateway: Arc<dyn VideoGateway>,
        media_resource_gateway: Arc<dyn MediaResourceGateway>,
    ) -> Self {
        Self {
            video_gateway,
            media_resource_gateway,
        }
    }
}

#[async_trait]
impl UseCase<DeleteVideoCommand, ()> for DeleteVideoHandler {
    async fn execute(&self, command: DeleteVideoCommand) -> AppResult<()> {
        let video_id = VideoId::from(command.id);

        self.video_gateway.delete_by_id(&video_id).await?;
        self.media_resource_gateway.clear_resources(&video_id).await?;

        LogContext::use_case("delete-video", video_id.value(), None);
        Ok(())
    }
}
