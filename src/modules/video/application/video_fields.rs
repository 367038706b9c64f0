use std::collections::HashSet;

use crate::modules::catalog::domain::{CastMemberId, CategoryId, GenreId};
use crate::modules::video::domain::{Rating, VideoMetadata};

/// Video metadata as received from a client, before parsing
#[derive(Debug, Clone, Default)]
pub struct VideoFields {
    pub title: String,
    pub description: String,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub opened: bool,
    pub published: bool,
    pub rating: Option<String>,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub cast_members: Vec<String>,
}

impl VideoFields {
    /// Unknown ratings become `None` and are reported by the validator
    pub fn into_metadata(self) -> VideoMetadata {
        VideoMetadata {
            title: self.title,
            description: self.description,
            launched_at: self.launched_at,
            duration: self.duration,
            opened: self.opened,
            published: self.published,
            rating: self.rating.as_deref().and_then(Rating::of),
            categories: to_ids::<CategoryId>(self.categories),
            genres: to_ids::<GenreId>(self.genres),
            cast_members: to_ids::<CastMemberId>(self.cast_members),
        }
    }
}

fn to_ids<I>(values: Vec<String>) -> HashSet<I>
where
    I: From<String> + Eq + std::hash::Hash,
{
    values.into_iter().map(I::from).collect()
}
