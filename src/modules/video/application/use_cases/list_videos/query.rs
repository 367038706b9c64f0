use crate::modules::video::domain::VideoSearchQuery;
use crate::shared::application::SortDirection;

/// Query for a page of videos, with raw client values
#[derive(Debug, Clone)]
pub struct ListVideosQuery {
    pub page: u32,
    pub per_page: u32,
    pub terms: String,
    pub sort: String,
    pub direction: String,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub cast_members: Vec<String>,
}

impl Default for ListVideosQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 10,
            terms: String::new(),
            sort: "title".to_string(),
            direction: "asc".to_string(),
            categories: Vec::new(),
            genres: Vec::new(),
            cast_members: Vec::new(),
        }
    }
}

impl From<ListVideosQuery> for VideoSearchQuery {
    fn from(query: ListVideosQuery) -> Self {
        VideoSearchQuery {
            page: query.page,
            per_page: query.per_page,
            terms: query.terms,
            sort: query.sort,
            direction: SortDirection::parse(&query.direction),
            categories: query.categories.into_iter().map(Into::into).collect(),
            genres: query.genres.into_iter().map(Into::into).collect(),
            cast_members: query.cast_members.into_iter().map(Into::into).collect(),
        }
    }
}
