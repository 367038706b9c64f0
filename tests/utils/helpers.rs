/// Test helper functions and service builders
use catalog_admin_lib::modules::catalog::{CastMemberId, CategoryId, GenreId};
use catalog_admin_lib::shared::config::{AppConfig, StorageBackend};
use catalog_admin_lib::CatalogServices;
use std::path::Path;
use tokio::sync::mpsc;

pub struct TestServices {
    pub services: CatalogServices,
    /// Outbound `VideoMediaCreated` events, as JSON
    pub events: mpsc::Receiver<String>,
}

impl TestServices {
    /// Take every event published so far
    pub fn drain_events(&mut self) -> Vec<serde_json::Value> {
        let mut events = Vec::new();
        while let Ok(payload) = self.events.try_recv() {
            events.push(serde_json::from_str(&payload).unwrap());
        }
        events
    }

    pub fn register_categories(&self, ids: &[&str]) {
        for id in ids {
            self.services.categories.register(CategoryId::from(*id));
        }
    }

    pub fn register_genres(&self, ids: &[&str]) {
        for id in ids {
            self.services.genres.register(GenreId::from(*id));
        }
    }

    pub fn register_cast_members(&self, ids: &[&str]) {
        for id in ids {
            self.services.cast_members.register(CastMemberId::from(*id));
        }
    }
}

fn build(config: AppConfig) -> TestServices {
    let (sender, events) = mpsc::channel(64);
    TestServices {
        services: CatalogServices::build(&config, sender),
        events,
    }
}

/// Build all services needed for integration tests on in-memory storage
pub fn build_test_services() -> TestServices {
    build(AppConfig::default())
}

/// Same as `build_test_services` but storing media below `root`
pub fn build_local_test_services(root: &Path) -> TestServices {
    let mut config = AppConfig::default();
    config.storage.backend = StorageBackend::Local(root.to_path_buf());
    build(config)
}

/// Completed encoder message for the given video and media
pub fn completed_message(video_id: &str, resource_id: &str, folder: &str, file: &str) -> String {
    serde_json::json!({
        "status": "COMPLETED",
        "id": video_id,
        "outputBucket": "codeflix-encoded",
        "video": {
            "encoderVideoFolder": folder,
            "resourceId": resource_id,
            "filePath": file,
        }
    })
    .to_string()
}

pub fn error_message(resource_id: &str, file: &str) -> String {
    serde_json::json!({
        "status": "ERROR",
        "message": { "resourceId": resource_id, "filePath": file },
        "error": "unsupported codec",
    })
    .to_string()
}
