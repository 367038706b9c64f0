//! Environment driven configuration
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file. Every key has a default so the service starts with no configuration.

use std::path::PathBuf;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_LOCATION_PATTERN: &str = "videoId-{videoId}";
pub const DEFAULT_FILENAME_PATTERN: &str = "type-{type}";

/// Where media resources are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Local(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Folder per video, `{videoId}` is substituted
    pub location_pattern: String,
    /// File name per media type, `{type}` is substituted
    pub filename_pattern: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            location_pattern: DEFAULT_LOCATION_PATTERN.to_string(),
            filename_pattern: DEFAULT_FILENAME_PATTERN.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: log::LevelFilter,
    pub storage: StorageConfig,
    /// Bounded capacity of the in-process encoder queues
    pub encoder_queue_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: log::LevelFilter::Info,
            storage: StorageConfig::default(),
            encoder_queue_capacity: 64,
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` (if present) and the environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let log_level = match lookup("CATALOG_LOG_LEVEL") {
            Some(raw) => raw.parse::<log::LevelFilter>().map_err(|_| {
                AppError::InvalidInput(format!("Invalid CATALOG_LOG_LEVEL: {}", raw))
            })?,
            None => defaults.log_level,
        };

        let backend = match lookup("STORAGE_BACKEND").as_deref() {
            None | Some("memory") => StorageBackend::Memory,
            Some("local") => StorageBackend::Local(PathBuf::from(
                lookup("STORAGE_ROOT").unwrap_or_else(|| "./storage".to_string()),
            )),
            Some(other) => {
                return Err(AppError::InvalidInput(format!(
                    "Invalid STORAGE_BACKEND: {} (expected 'memory' or 'local')",
                    other
                )))
            }
        };

        let location_pattern = lookup("STORAGE_LOCATION_PATTERN")
            .unwrap_or_else(|| DEFAULT_LOCATION_PATTERN.to_string());
        if !location_pattern.contains("{videoId}") {
            return Err(AppError::InvalidInput(
                "STORAGE_LOCATION_PATTERN must contain {videoId}".to_string(),
            ));
        }

        let filename_pattern = lookup("STORAGE_FILENAME_PATTERN")
            .unwrap_or_else(|| DEFAULT_FILENAME_PATTERN.to_string());
        if !filename_pattern.contains("{type}") {
            return Err(AppError::InvalidInput(
                "STORAGE_FILENAME_PATTERN must contain {type}".to_string(),
            ));
        }

        let encoder_queue_capacity = match lookup("ENCODER_QUEUE_CAPACITY") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(AppError::InvalidInput(format!(
                        "Invalid ENCODER_QUEUE_CAPACITY: {}",
                        raw
                    )))
                }
            },
            None => defaults.encoder_queue_capacity,
        };

        Ok(Self {
            log_level,
            storage: StorageConfig {
                backend,
                location_pattern,
                filename_pattern,
            },
            encoder_queue_capacity,
        })
    }
}
