use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::media_status::MediaStatus;
use crate::shared::domain::identifier::unique_value;

/// A stored video or trailer asset together with its encoding progress.
///
/// Two records pointing at the same stored bytes are the same media, so
/// equality only looks at `checksum` and `raw_location`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioVideoMedia {
    id: String,
    checksum: String,
    name: String,
    raw_location: String,
    encoded_location: String,
    status: MediaStatus,
}

impl AudioVideoMedia {
    /// Media that was just written to storage and still waits for the encoder
    pub fn new_stored(
        checksum: impl Into<String>,
        name: impl Into<String>,
        raw_location: impl Into<String>,
    ) -> Self {
        Self {
            id: unique_value(),
            checksum: checksum.into(),
            name: name.into(),
            raw_location: raw_location.into(),
            encoded_location: String::new(),
            status: MediaStatus::Pending,
        }
    }

    /// Reconstruct a known media record
    pub fn with(
        id: impl Into<String>,
        checksum: impl Into<String>,
        name: impl Into<String>,
        raw_location: impl Into<String>,
        encoded_location: impl Into<String>,
        status: MediaStatus,
    ) -> Self {
        Self {
            id: id.into(),
            checksum: checksum.into(),
            name: name.into(),
            raw_location: raw_location.into(),
            encoded_location: encoded_location.into(),
            status,
        }
    }

    /// Copy of this media marked as being encoded
    pub fn processing(&self) -> Self {
        Self {
            status: MediaStatus::Processing,
            ..self.clone()
        }
    }

    /// Copy of this media marked as encoded at `encoded_path`
    pub fn completed(&self, encoded_path: impl Into<String>) -> Self {
        Self {
            status: MediaStatus::Completed,
            encoded_location: encoded_path.into(),
            ..self.clone()
        }
    }

    pub fn is_pending_encode(&self) -> bool {
        self.status == MediaStatus::Pending
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_location(&self) -> &str {
        &self.raw_location
    }

    pub fn encoded_location(&self) -> &str {
        &self.encoded_location
    }

    pub fn status(&self) -> MediaStatus {
        self.status
    }
}

impl PartialEq for AudioVideoMedia {
    fn eq(&self, other: &Self) -> bool {
        self.checksum == other.checksum && self.raw_location == other.raw_location
    }
}

impl Eq for AudioVideoMedia {}

impl Hash for AudioVideoMedia {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.checksum.hash(state);
        self.raw_location.hash(state);
    }
}

/// A stored banner or thumbnail. Images are never encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageMedia {
    checksum: String,
    name: String,
    location: String,
}

impl ImageMedia {
    pub fn with(
        checksum: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            checksum: checksum.into(),
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl PartialEq for ImageMedia {
    fn eq(&self, other: &Self) -> bool {
        self.checksum == other.checksum && self.location == other.location
    }
}

impl Eq for ImageMedia {}

impl Hash for ImageMedia {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.checksum.hash(state);
        self.location.hash(state);
    }
}
