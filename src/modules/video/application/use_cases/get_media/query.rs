/// Query for the stored bytes of one media slot
#[derive(Debug, Clone)]
pub struct GetMediaQuery {
    pub video_id: String,
    /// Media type name, e.g. `VIDEO` or `thumbnail_half`
    pub media_type: String,
}

impl GetMediaQuery {
    pub fn new(video_id: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            media_type: media_type.into(),
        }
    }
}
