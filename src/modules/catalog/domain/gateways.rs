use async_trait::async_trait;

use super::identifiers::{CastMemberId, CategoryId, GenreId};
use crate::shared::errors::AppResult;

/// Existence checks against the category store
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    /// Returns the subset of `ids` that exist
    async fn exists_by_ids(&self, ids: &[CategoryId]) -> AppResult<Vec<CategoryId>>;
}

/// Existence checks against the genre store
#[async_trait]
pub trait GenreGateway: Send + Sync {
    /// Returns the subset of `ids` that exist
    async fn exists_by_ids(&self, ids: &[GenreId]) -> AppResult<Vec<GenreId>>;
}

/// Existence checks against the cast member store
#[async_trait]
pub trait CastMemberGateway: Send + Sync {
    /// Returns the subset of `ids` that exist
    async fn exists_by_ids(&self, ids: &[CastMemberId]) -> AppResult<Vec<CastMemberId>>;
}
