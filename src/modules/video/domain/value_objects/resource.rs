use sha2::{Digest, Sha256};

use super::video_media_type::VideoMediaType;

/// Raw bytes handed in by a client, consumed once by storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    content: Vec<u8>,
    checksum: String,
    content_type: String,
    name: String,
}

impl Resource {
    /// Resource with a caller supplied checksum
    pub fn with(
        content: Vec<u8>,
        checksum: impl Into<String>,
        content_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            content,
            checksum: checksum.into(),
            content_type: content_type.into(),
            name: name.into(),
        }
    }

    /// Resource whose checksum is the SHA-256 of its content, hex encoded
    pub fn of(content: Vec<u8>, content_type: impl Into<String>, name: impl Into<String>) -> Self {
        let checksum = Sha256::digest(&content)
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<String>();

        Self::with(content, checksum, content_type, name)
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A resource tagged with the slot it is meant for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoResource {
    media_type: VideoMediaType,
    resource: Resource,
}

impl VideoResource {
    pub fn with(media_type: VideoMediaType, resource: Resource) -> Self {
        Self {
            media_type,
            resource,
        }
    }

    pub fn media_type(&self) -> VideoMediaType {
        self.media_type
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn into_resource(self) -> Resource {
        self.resource
    }
}
