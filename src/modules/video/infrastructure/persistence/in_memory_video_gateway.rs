use async_trait::async_trait;
use dashmap::DashMap;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::modules::video::domain::{Video, VideoGateway, VideoId, VideoSearchQuery, VideoSnapshot};
use crate::shared::application::{PaginatedResult, SortDirection};
use crate::shared::errors::AppResult;

/// Process-local video store keyed by id
///
/// Stores the flat `VideoSnapshot` shape and rebuilds aggregates on every
/// read, so no mutable instance is shared between callers. Writes are last
/// write wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVideoGateway {
    videos: Arc<DashMap<VideoId, VideoSnapshot>>,
}

impl InMemoryVideoGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    fn save(&self, video: &Video) -> Video {
        let snapshot = video.to_snapshot();
        self.videos.insert(snapshot.id.clone(), snapshot.clone());
        Video::with(snapshot)
    }
}

fn matches(snapshot: &VideoSnapshot, query: &VideoSearchQuery) -> bool {
    let metadata = &snapshot.metadata;

    let terms = query.terms.trim().to_lowercase();
    let matches_terms = terms.is_empty()
        || metadata.title.to_lowercase().contains(&terms)
        || metadata.description.to_lowercase().contains(&terms);

    // Each non-empty id filter needs at least one shared id
    let matches_categories = query.categories.is_empty()
        || !query.categories.is_disjoint(&metadata.categories);
    let matches_genres =
        query.genres.is_empty() || !query.genres.is_disjoint(&metadata.genres);
    let matches_cast_members = query.cast_members.is_empty()
        || !query.cast_members.is_disjoint(&metadata.cast_members);

    matches_terms && matches_categories && matches_genres && matches_cast_members
}

fn compare(a: &VideoSnapshot, b: &VideoSnapshot, sort: &str) -> Ordering {
    match sort {
        "createdAt" | "created_at" => a.created_at.cmp(&b.created_at),
        _ => a
            .metadata
            .title
            .to_lowercase()
            .cmp(&b.metadata.title.to_lowercase()),
    }
}

#[async_trait]
impl VideoGateway for InMemoryVideoGateway {
    async fn create(&self, video: &Video) -> AppResult<Video> {
        Ok(self.save(video))
    }

    async fn update(&self, video: &Video) -> AppResult<Video> {
        Ok(self.save(video))
    }

    async fn find_by_id(&self, id: &VideoId) -> AppResult<Option<Video>> {
        Ok(self
            .videos
            .get(id)
            .map(|entry| Video::with(entry.value().clone())))
    }

    async fn delete_by_id(&self, id: &VideoId) -> AppResult<()> {
        self.videos.remove(id);
        Ok(())
    }

    async fn find_all(&self, query: &VideoSearchQuery) -> AppResult<PaginatedResult<Video>> {
        let mut found: Vec<VideoSnapshot> = self
            .videos
            .iter()
            .filter(|entry| matches(entry.value(), query))
            .map(|entry| entry.value().clone())
            .collect();

        found.sort_by(|a, b| {
            let ordering = compare(a, b, &query.sort);
            match query.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = found.len() as u64;
        let items = found
            .into_iter()
            .skip(query.page as usize * query.per_page as usize)
            .take(query.per_page as usize)
            .map(Video::with)
            .collect();

        Ok(PaginatedResult::new(items, total, query.page, query.per_page))
    }
}
