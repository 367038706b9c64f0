mod media_resource_gateway;
mod video_gateway;

pub use media_resource_gateway::MediaResourceGateway;
pub use video_gateway::{VideoGateway, VideoSearchQuery};
