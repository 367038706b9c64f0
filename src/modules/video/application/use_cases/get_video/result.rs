use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::video::domain::{AudioVideoMedia, ImageMedia, MediaStatus, Video};
use crate::shared::domain::Identifier;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioVideoMediaOutput {
    pub id: String,
    pub checksum: String,
    pub name: String,
    pub raw_location: String,
    pub encoded_location: String,
    pub status: MediaStatus,
}

impl From<&AudioVideoMedia> for AudioVideoMediaOutput {
    fn from(media: &AudioVideoMedia) -> Self {
        Self {
            id: media.id().to_string(),
            checksum: media.checksum().to_string(),
            name: media.name().to_string(),
            raw_location: media.raw_location().to_string(),
            encoded_location: media.encoded_location().to_string(),
            status: media.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageMediaOutput {
    pub checksum: String,
    pub name: String,
    pub location: String,
}

impl From<&ImageMedia> for ImageMediaOutput {
    fn from(media: &ImageMedia) -> Self {
        Self {
            checksum: media.checksum().to_string(),
            name: media.name().to_string(),
            location: media.location().to_string(),
        }
    }
}

/// Full read view of a video
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoOutput {
    pub id: String,
    pub title: String,
    pub description: String,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub opened: bool,
    pub published: bool,
    pub rating: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub banner: Option<ImageMediaOutput>,
    pub thumbnail: Option<ImageMediaOutput>,
    pub thumbnail_half: Option<ImageMediaOutput>,
    pub video: Option<AudioVideoMediaOutput>,
    pub trailer: Option<AudioVideoMediaOutput>,
    /// Sorted for stable output
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub cast_members: Vec<String>,
}

fn sorted_values<'a, I, T>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a T>,
    T: Identifier + 'a,
{
    let mut values: Vec<String> = ids.into_iter().map(|id| id.value().to_string()).collect();
    values.sort();
    values
}

impl From<&Video> for VideoOutput {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id().to_string(),
            title: video.title().to_string(),
            description: video.description().to_string(),
            launched_at: video.launched_at(),
            duration: video.duration(),
            opened: video.opened(),
            published: video.published(),
            rating: video.rating().map(|r| r.as_str().to_string()),
            created_at: video.created_at(),
            updated_at: video.updated_at(),
            banner: video.banner().map(ImageMediaOutput::from),
            thumbnail: video.thumbnail().map(ImageMediaOutput::from),
            thumbnail_half: video.thumbnail_half().map(ImageMediaOutput::from),
            video: video.video().map(AudioVideoMediaOutput::from),
            trailer: video.trailer().map(AudioVideoMediaOutput::from),
            categories: sorted_values(video.categories()),
            genres: sorted_values(video.genres()),
            cast_members: sorted_values(video.cast_members()),
        }
    }
}

pub type GetVideoResult = VideoOutput;
