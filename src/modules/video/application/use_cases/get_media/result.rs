use crate::modules::video::domain::Resource;

/// Stored content of a media slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaOutput {
    pub content: Vec<u8>,
    pub content_type: String,
    pub name: String,
}

impl From<Resource> for MediaOutput {
    fn from(resource: Resource) -> Self {
        Self {
            content: resource.content().to_vec(),
            content_type: resource.content_type().to_string(),
            name: resource.name().to_string(),
        }
    }
}

pub type GetMediaResult = MediaOutput;
