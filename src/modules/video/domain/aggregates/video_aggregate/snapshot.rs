use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::metadata::VideoMetadata;
use crate::modules::video::domain::{
    events::VideoMediaCreated,
    identifiers::VideoId,
    value_objects::{AudioVideoMedia, ImageMedia},
};

/// Flat persisted shape of a video, including events not yet drained
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnapshot {
    pub id: VideoId,
    #[serde(flatten)]
    pub metadata: VideoMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub banner: Option<ImageMedia>,
    pub thumbnail: Option<ImageMedia>,
    pub thumbnail_half: Option<ImageMedia>,
    pub trailer: Option<AudioVideoMedia>,
    pub video: Option<AudioVideoMedia>,
    #[serde(default)]
    pub domain_events: Vec<VideoMediaCreated>,
}
