use async_trait::async_trait;
use dashmap::DashSet;
use std::hash::Hash;

use crate::modules::catalog::domain::{
    CastMemberGateway, CastMemberId, CategoryGateway, CategoryId, GenreGateway, GenreId,
};
use crate::shared::errors::AppResult;

/// In-process set of known identifiers, answering existence checks
#[derive(Debug)]
pub struct InMemoryIdRegistry<I: Eq + Hash> {
    ids: DashSet<I>,
}

impl<I: Eq + Hash + Clone> InMemoryIdRegistry<I> {
    pub fn new() -> Self {
        Self {
            ids: DashSet::new(),
        }
    }

    pub fn with_ids(ids: impl IntoIterator<Item = I>) -> Self {
        let registry = Self::new();
        for id in ids {
            registry.register(id);
        }
        registry
    }

    pub fn register(&self, id: I) {
        self.ids.insert(id);
    }

    pub fn remove(&self, id: &I) {
        self.ids.remove(id);
    }

    fn existing(&self, ids: &[I]) -> Vec<I> {
        ids.iter()
            .filter(|id| self.ids.contains(*id))
            .cloned()
            .collect()
    }
}

impl<I: Eq + Hash + Clone> Default for InMemoryIdRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryGateway for InMemoryIdRegistry<CategoryId> {
    async fn exists_by_ids(&self, ids: &[CategoryId]) -> AppResult<Vec<CategoryId>> {
        Ok(self.existing(ids))
    }
}

#[async_trait]
impl GenreGateway for InMemoryIdRegistry<GenreId> {
    async fn exists_by_ids(&self, ids: &[GenreId]) -> AppResult<Vec<GenreId>> {
        Ok(self.existing(ids))
    }
}

#[async_trait]
impl CastMemberGateway for InMemoryIdRegistry<CastMemberId> {
    async fn exists_by_ids(&self, ids: &[CastMemberId]) -> AppResult<Vec<CastMemberId>> {
        Ok(self.existing(ids))
    }
}
