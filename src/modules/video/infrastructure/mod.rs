pub mod messaging;
pub mod persistence;
pub mod storage;

pub use messaging::{QueueEventPublisher, VideoEncoderListener};
pub use persistence::InMemoryVideoGateway;
pub use storage::{
    DefaultMediaResourceGateway, InMemoryStorageService, LocalStorageService, StorageService,
};
