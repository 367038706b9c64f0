use serde::{Deserialize, Serialize};

/// The five asset roles a video can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoMediaType {
    Video,
    Trailer,
    Banner,
    Thumbnail,
    ThumbnailHalf,
}

impl VideoMediaType {
    pub const ALL: [VideoMediaType; 5] = [
        VideoMediaType::Video,
        VideoMediaType::Trailer,
        VideoMediaType::Banner,
        VideoMediaType::Thumbnail,
        VideoMediaType::ThumbnailHalf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoMediaType::Video => "VIDEO",
            VideoMediaType::Trailer => "TRAILER",
            VideoMediaType::Banner => "BANNER",
            VideoMediaType::Thumbnail => "THUMBNAIL",
            VideoMediaType::ThumbnailHalf => "THUMBNAIL_HALF",
        }
    }

    /// Lookup by name, ignoring case
    pub fn of(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
    }

    /// Video and trailer carry a processing status, images do not
    pub fn is_audio_video(&self) -> bool {
        matches!(self, VideoMediaType::Video | VideoMediaType::Trailer)
    }

    pub fn is_image(&self) -> bool {
        !self.is_audio_video()
    }
}

impl std::fmt::Display for VideoMediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
