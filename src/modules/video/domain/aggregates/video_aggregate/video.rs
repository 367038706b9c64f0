/// Video Aggregate Root
///
/// Holds the metadata of a video and its five optional media slots. All
/// slot changes go through the aggregate so that stored audio/video assets
/// waiting for the encoder are always announced with a `VideoMediaCreated`
/// event.
use chrono::{DateTime, Utc};
use std::collections::HashSet;

use super::metadata::VideoMetadata;
use super::snapshot::VideoSnapshot;
use crate::modules::catalog::domain::{CastMemberId, CategoryId, GenreId};
use crate::modules::video::domain::{
    events::VideoMediaCreated,
    identifiers::VideoId,
    validator::VideoValidator,
    value_objects::{AudioVideoMedia, ImageMedia, Rating, VideoMediaType},
};
use crate::shared::errors::AppResult;
use crate::shared::validation::{ValidationHandler, Validator};

#[derive(Debug, Clone)]
pub struct Video {
    id: VideoId,
    metadata: VideoMetadata,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    banner: Option<ImageMedia>,
    thumbnail: Option<ImageMedia>,
    thumbnail_half: Option<ImageMedia>,
    trailer: Option<AudioVideoMedia>,
    video: Option<AudioVideoMedia>,

    /// Events recorded since the aggregate was loaded, drained by the
    /// application layer after persistence
    pending_events: Vec<VideoMediaCreated>,
}

impl Video {
    /// Create a brand-new video with empty media slots
    pub fn new_video(metadata: VideoMetadata) -> Self {
        let now = Utc::now();

        Self {
            id: VideoId::unique(),
            metadata,
            created_at: now,
            updated_at: now,
            banner: None,
            thumbnail: None,
            thumbnail_half: None,
            trailer: None,
            video: None,
            pending_events: Vec::new(),
        }
    }

    /// Rebuild a video from its persisted shape
    pub fn with(snapshot: VideoSnapshot) -> Self {
        Self {
            id: snapshot.id,
            metadata: snapshot.metadata,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
            banner: snapshot.banner,
            thumbnail: snapshot.thumbnail,
            thumbnail_half: snapshot.thumbnail_half,
            trailer: snapshot.trailer,
            video: snapshot.video,
            pending_events: snapshot.domain_events,
        }
    }

    pub fn to_snapshot(&self) -> VideoSnapshot {
        VideoSnapshot {
            id: self.id.clone(),
            metadata: self.metadata.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            banner: self.banner.clone(),
            thumbnail: self.thumbnail.clone(),
            thumbnail_half: self.thumbnail_half.clone(),
            trailer: self.trailer.clone(),
            video: self.video.clone(),
            domain_events: self.pending_events.clone(),
        }
    }

    // ============================================================================================
    // BUSINESS OPERATIONS (Commands)
    // ============================================================================================

    /// Replace every scalar and relational field. Media slots are untouched.
    pub fn update(&mut self, metadata: VideoMetadata) -> &mut Self {
        self.metadata = metadata;
        self.touch();
        self
    }

    pub fn update_video_media(&mut self, media: Option<AudioVideoMedia>) -> &mut Self {
        self.on_audio_video_media_updated(media.as_ref());
        self.video = media;
        self.touch();
        self
    }

    pub fn update_trailer_media(&mut self, media: Option<AudioVideoMedia>) -> &mut Self {
        self.on_audio_video_media_updated(media.as_ref());
        self.trailer = media;
        self.touch();
        self
    }

    pub fn update_banner_media(&mut self, media: Option<ImageMedia>) -> &mut Self {
        self.banner = media;
        self.touch();
        self
    }

    pub fn update_thumbnail_media(&mut self, media: Option<ImageMedia>) -> &mut Self {
        self.thumbnail = media;
        self.touch();
        self
    }

    pub fn update_thumbnail_half_media(&mut self, media: Option<ImageMedia>) -> &mut Self {
        self.thumbnail_half = media;
        self.touch();
        self
    }

    /// Mark the given audio/video slot as being encoded. No-op for image
    /// types and empty slots.
    pub fn processing(&mut self, media_type: VideoMediaType) -> &mut Self {
        match media_type {
            VideoMediaType::Video => {
                if let Some(media) = self.video.as_ref().map(AudioVideoMedia::processing) {
                    self.update_video_media(Some(media));
                }
            }
            VideoMediaType::Trailer => {
                if let Some(media) = self.trailer.as_ref().map(AudioVideoMedia::processing) {
                    self.update_trailer_media(Some(media));
                }
            }
            _ => {}
        }
        self
    }

    /// Mark the given audio/video slot as encoded at `encoded_path`. No-op
    /// for image types and empty slots.
    pub fn completed(&mut self, media_type: VideoMediaType, encoded_path: &str) -> &mut Self {
        match media_type {
            VideoMediaType::Video => {
                if let Some(media) = self.video.as_ref().map(|m| m.completed(encoded_path)) {
                    self.update_video_media(Some(media));
                }
            }
            VideoMediaType::Trailer => {
                if let Some(media) = self.trailer.as_ref().map(|m| m.completed(encoded_path)) {
                    self.update_trailer_media(Some(media));
                }
            }
            _ => {}
        }
        self
    }

    /// Run every field check against `handler`
    pub fn validate(&self, handler: &mut dyn ValidationHandler) -> AppResult<()> {
        VideoValidator::new(self).validate(handler)
    }

    fn on_audio_video_media_updated(&mut self, media: Option<&AudioVideoMedia>) {
        if let Some(media) = media.filter(|m| m.is_pending_encode()) {
            self.pending_events
                .push(VideoMediaCreated::new(media.id(), media.raw_location()));
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // ============================================================================================
    // QUERIES (Read-only)
    // ============================================================================================

    pub fn id(&self) -> &VideoId {
        &self.id
    }

    pub fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn description(&self) -> &str {
        &self.metadata.description
    }

    pub fn launched_at(&self) -> Option<i32> {
        self.metadata.launched_at
    }

    pub fn duration(&self) -> f64 {
        self.metadata.duration
    }

    pub fn opened(&self) -> bool {
        self.metadata.opened
    }

    pub fn published(&self) -> bool {
        self.metadata.published
    }

    pub fn rating(&self) -> Option<Rating> {
        self.metadata.rating
    }

    pub fn categories(&self) -> &HashSet<CategoryId> {
        &self.metadata.categories
    }

    pub fn genres(&self) -> &HashSet<GenreId> {
        &self.metadata.genres
    }

    pub fn cast_members(&self) -> &HashSet<CastMemberId> {
        &self.metadata.cast_members
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn video(&self) -> Option<&AudioVideoMedia> {
        self.video.as_ref()
    }

    pub fn trailer(&self) -> Option<&AudioVideoMedia> {
        self.trailer.as_ref()
    }

    pub fn banner(&self) -> Option<&ImageMedia> {
        self.banner.as_ref()
    }

    pub fn thumbnail(&self) -> Option<&ImageMedia> {
        self.thumbnail.as_ref()
    }

    pub fn thumbnail_half(&self) -> Option<&ImageMedia> {
        self.thumbnail_half.as_ref()
    }

    /// The audio/video slot for `media_type`, `None` for image types
    pub fn audio_video(&self, media_type: VideoMediaType) -> Option<&AudioVideoMedia> {
        match media_type {
            VideoMediaType::Video => self.video(),
            VideoMediaType::Trailer => self.trailer(),
            _ => None,
        }
    }

    // ============================================================================================
    // EVENT HANDLING
    // ============================================================================================

    pub fn pending_events(&self) -> &[VideoMediaCreated] {
        &self.pending_events
    }

    /// Take the pending events, leaving the aggregate with none
    pub fn pull_events(&mut self) -> Vec<VideoMediaCreated> {
        std::mem::take(&mut self.pending_events)
    }
}
