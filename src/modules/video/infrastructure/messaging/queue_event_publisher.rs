use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::log_debug;
use crate::modules::video::application::ports::EventPublisher;
use crate::modules::video::domain::VideoMediaCreated;
use crate::shared::domain::DomainEvent;
use crate::shared::errors::{AppError, AppResult};

/// Publishes events as JSON lines on a bounded in-process queue
#[derive(Debug, Clone)]
pub struct QueueEventPublisher {
    sender: mpsc::Sender<String>,
}

impl QueueEventPublisher {
    pub fn new(sender: mpsc::Sender<String>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl EventPublisher for QueueEventPublisher {
    async fn publish_all(&self, events: Vec<VideoMediaCreated>) -> AppResult<()> {
        for event in events {
            let payload = serde_json::to_string(&event)?;

            self.sender.send(payload).await.map_err(|_| {
                AppError::InternalError(format!(
                    "Event queue closed while publishing {} [resourceId:{}]",
                    event.event_type(),
                    event.resource_id
                ))
            })?;

            log_debug!(
                "Published {} [resourceId:{}]",
                event.event_type(),
                event.resource_id
            );
        }
        Ok(())
    }
}
