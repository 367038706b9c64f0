use serde::Serialize;

/// Result of updating a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateVideoResult {
    pub id: String,
}

impl UpdateVideoResult {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}
