/// Pagination support for queries
///
/// Standard pagination model used across all bounded contexts
use serde::{Deserialize, Serialize};

/// Sort direction for listing queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction, falling back to ascending for anything unknown
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, page: u32, per_page: u32) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            ((total_count as f64) / (per_page as f64)).ceil() as u32
        };

        Self {
            items,
            total_count,
            page,
            per_page,
            total_pages,
        }
    }

    /// Transform the items while keeping the page metadata
    pub fn map<U, F>(self, f: F) -> PaginatedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
