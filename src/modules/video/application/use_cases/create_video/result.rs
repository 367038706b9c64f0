use serde::Serialize;

/// Result of creating a new video
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateVideoResult {
    pub id: String,
}

impl CreateVideoResult {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}
