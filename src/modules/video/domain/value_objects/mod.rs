mod media;
mod media_status;
mod rating;
mod resource;
mod video_media_type;

pub use media::{AudioVideoMedia, ImageMedia};
pub use media_status::MediaStatus;
pub use rating::Rating;
pub use resource::{Resource, VideoResource};
pub use video_media_type::VideoMediaType;
