use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::domain::{VideoGateway, VideoSearchQuery};
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::{
    query::ListVideosQuery,
    result::{ListVideosResult, VideoListOutput},
};

/// Query handler for listing videos
pub struct ListVideosHandler {
    video_gateway: Arc<dyn VideoGateway>,
}

impl ListVideosHandler {
    pub fn new(video_gateway: Arc<dyn VideoGateway>) -> Self {
        Self { video_gateway }
    }
}

#[async_trait]
impl Query<ListVideosQuery, ListVideosResult> for ListVideosHandler {
    async fn execute(&self, query: ListVideosQuery) -> AppResult<ListVideosResult> {
        let search = VideoSearchQuery::from(query);

        // Delegate to gateway
        let page = self.video_gateway.find_all(&search).await?;
        Ok(page.map(|video| VideoListOutput::from(&video)))
    }
}
