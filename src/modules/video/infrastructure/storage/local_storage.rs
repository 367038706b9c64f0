use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::storage_service::StorageService;
use crate::modules::video::domain::Resource;
use crate::shared::errors::{AppError, AppResult};

const META_SUFFIX: &str = ".meta.json";

/// Everything about a stored resource except its bytes
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceMeta {
    checksum: String,
    content_type: String,
    name: String,
}

/// Stores each resource as a file under `root`, with a JSON sidecar
/// (`<file>.meta.json`) holding checksum, content type and name
#[derive(Debug, Clone)]
pub struct LocalStorageService {
    root: PathBuf,
}

impl LocalStorageService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, location: &str) -> AppResult<PathBuf> {
        let relative = Path::new(location);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));

        if location.is_empty() || escapes {
            return Err(AppError::InvalidInput(format!(
                "Invalid storage location: {}",
                location
            )));
        }

        Ok(self.root.join(relative))
    }

    fn meta_path(path: &Path) -> PathBuf {
        let mut meta = path.as_os_str().to_owned();
        meta.push(META_SUFFIX);
        PathBuf::from(meta)
    }

    /// Relative locations of every content file below `dir`
    async fn collect(&self, dir: PathBuf, locations: &mut Vec<String>) -> AppResult<()> {
        let mut pending = vec![dir];

        while let Some(dir) = pending.pop() {
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };

            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if entry.file_type().await?.is_dir() {
                    pending.push(path);
                    continue;
                }

                let Ok(relative) = path.strip_prefix(&self.root) else {
                    continue;
                };
                let location = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");

                if !location.ends_with(META_SUFFIX) {
                    locations.push(location);
                }
            }
        }

        Ok(())
    }
}

async fn remove_if_exists(path: &Path) -> AppResult<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[async_trait]
impl StorageService for LocalStorageService {
    async fn store(&self, location: &str, resource: &Resource) -> AppResult<()> {
        let path = self.path_for(location)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let meta = ResourceMeta {
            checksum: resource.checksum().to_string(),
            content_type: resource.content_type().to_string(),
            name: resource.name().to_string(),
        };

        tokio::fs::write(&path, resource.content()).await?;
        tokio::fs::write(Self::meta_path(&path), serde_json::to_vec(&meta)?).await?;
        Ok(())
    }

    async fn get(&self, location: &str) -> AppResult<Option<Resource>> {
        let path = self.path_for(location)?;

        let content = match tokio::fs::read(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let meta: ResourceMeta =
            serde_json::from_slice(&tokio::fs::read(Self::meta_path(&path)).await?)?;

        Ok(Some(Resource::with(
            content,
            meta.checksum,
            meta.content_type,
            meta.name,
        )))
    }

    async fn list(&self, prefix: &str) -> AppResult<Vec<String>> {
        let mut locations = Vec::new();
        self.collect(self.root.clone(), &mut locations).await?;

        locations.retain(|location| location.starts_with(prefix));
        locations.sort();
        Ok(locations)
    }

    async fn delete_all(&self, locations: &[String]) -> AppResult<()> {
        for location in locations {
            let path = self.path_for(location)?;
            remove_if_exists(&path).await?;
            remove_if_exists(&Self::meta_path(&path)).await?;
        }
        Ok(())
    }
}
