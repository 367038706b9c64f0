use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use super::storage_service::StorageService;
use crate::modules::video::domain::Resource;
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStorageService {
    resources: Arc<DashMap<String, Resource>>,
}

impl InMemoryStorageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[async_trait]
impl StorageService for InMemoryStorageService {
    async fn store(&self, location: &str, resource: &Resource) -> AppResult<()> {
        self.resources.insert(location.to_string(), resource.clone());
        Ok(())
    }

    async fn get(&self, location: &str) -> AppResult<Option<Resource>> {
        Ok(self.resources.get(location).map(|entry| entry.value().clone()))
    }

    async fn list(&self, prefix: &str) -> AppResult<Vec<String>> {
        let mut locations: Vec<String> = self
            .resources
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect();
        locations.sort();
        Ok(locations)
    }

    async fn delete_all(&self, locations: &[String]) -> AppResult<()> {
        for location in locations {
            self.resources.remove(location);
        }
        Ok(())
    }
}
