/// Domain events for the Video aggregate
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::domain::DomainEvent;

/// An audio/video asset was stored and now waits for the encoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMediaCreated {
    /// Id of the media record, echoed back by the encoder
    pub resource_id: String,
    /// Raw location of the stored bytes
    pub file_path: String,
    pub occurred_on: DateTime<Utc>,
}

impl VideoMediaCreated {
    pub fn new(resource_id: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            resource_id: resource_id.into(),
            file_path: file_path.into(),
            occurred_on: Utc::now(),
        }
    }
}

impl DomainEvent for VideoMediaCreated {
    fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }

    fn event_type(&self) -> &'static str {
        "VideoMediaCreated"
    }
}
