mod in_memory_storage;
mod local_storage;
mod media_resource_gateway;
mod storage_service;

pub use in_memory_storage::InMemoryStorageService;
pub use local_storage::LocalStorageService;
pub use media_resource_gateway::DefaultMediaResourceGateway;
pub use storage_service::StorageService;
