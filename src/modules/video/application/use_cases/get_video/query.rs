/// Query for loading a single video
#[derive(Debug, Clone)]
pub struct GetVideoQuery {
    pub id: String,
}

impl GetVideoQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
