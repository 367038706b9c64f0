use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::modules::catalog::domain::{CastMemberId, CategoryId, GenreId};
use crate::modules::video::domain::value_objects::Rating;

/// The editable, non-media part of a video
///
/// `launched_at` and `rating` stay optional so that unparseable input
/// reaches the validator as a missing value instead of failing early.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub opened: bool,
    pub published: bool,
    pub rating: Option<Rating>,
    pub categories: HashSet<CategoryId>,
    pub genres: HashSet<GenreId>,
    pub cast_members: HashSet<CastMemberId>,
}
