pub mod aggregates;
pub mod events;
pub mod gateways;
pub mod identifiers;
pub mod validator;
pub mod value_objects;

// Re-exports for easy access
pub use aggregates::{Video, VideoMetadata, VideoSnapshot};
pub use events::VideoMediaCreated;
pub use gateways::{MediaResourceGateway, VideoGateway, VideoSearchQuery};
pub use identifiers::VideoId;
pub use validator::VideoValidator;
pub use value_objects::{
    AudioVideoMedia, ImageMedia, MediaStatus, Rating, Resource, VideoMediaType, VideoResource,
};
