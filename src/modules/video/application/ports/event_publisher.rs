use async_trait::async_trait;

use crate::modules::video::domain::VideoMediaCreated;
use crate::shared::errors::AppResult;

/// Port (interface) for handing domain events to the encoding pipeline
/// Infrastructure layer implements this (in-process queue, message broker, etc.)
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish events in the order they were recorded
    async fn publish_all(&self, events: Vec<VideoMediaCreated>) -> AppResult<()>;
}
