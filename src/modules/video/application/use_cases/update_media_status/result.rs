use crate::modules::video::domain::{MediaStatus, VideoMediaType};

/// What happened to an encoder notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMediaStatusResult {
    /// The matching slot was updated and persisted
    Applied(VideoMediaType),
    /// The video no longer exists
    VideoNotFound,
    /// Neither the video nor the trailer slot holds this resource
    NoMatchingMedia,
    /// `PENDING` or `ERROR`: the aggregate has no transition for them, so
    /// the video is neither loaded nor persisted
    Ignored(MediaStatus),
}
