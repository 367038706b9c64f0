use async_trait::async_trait;
use std::collections::HashSet;

use crate::modules::catalog::domain::{CastMemberId, CategoryId, GenreId};
use crate::modules::video::domain::{aggregates::Video, identifiers::VideoId};
use crate::shared::application::{PaginatedResult, SortDirection};
use crate::shared::errors::AppResult;

/// Search parameters for listing videos
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoSearchQuery {
    /// Zero based page index
    pub page: u32,
    pub per_page: u32,
    /// Case-insensitive match on title or description, empty matches all
    pub terms: String,
    /// `title` or `createdAt`
    pub sort: String,
    pub direction: SortDirection,
    pub categories: HashSet<CategoryId>,
    pub genres: HashSet<GenreId>,
    pub cast_members: HashSet<CastMemberId>,
}

/// Persistence boundary of the Video aggregate
#[async_trait]
pub trait VideoGateway: Send + Sync {
    async fn create(&self, video: &Video) -> AppResult<Video>;

    /// Last write wins, no version check
    async fn update(&self, video: &Video) -> AppResult<Video>;

    async fn find_by_id(&self, id: &VideoId) -> AppResult<Option<Video>>;

    /// Deleting an unknown id is not an error
    async fn delete_by_id(&self, id: &VideoId) -> AppResult<()>;

    async fn find_all(&self, query: &VideoSearchQuery) -> AppResult<PaginatedResult<Video>>;
}
