use async_trait::async_trait;

use crate::modules::video::domain::Resource;
use crate::shared::errors::AppResult;

/// Key/value blob store addressed by `/` separated locations
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Write `resource` at `location`, replacing anything already there
    async fn store(&self, location: &str, resource: &Resource) -> AppResult<()>;

    async fn get(&self, location: &str) -> AppResult<Option<Resource>>;

    /// Every stored location starting with `prefix`, sorted
    async fn list(&self, prefix: &str) -> AppResult<Vec<String>>;

    /// Unknown locations are skipped
    async fn delete_all(&self, locations: &[String]) -> AppResult<()>;
}
