pub mod create_video;
pub mod delete_video;
pub mod get_media;
pub mod get_video;
pub mod list_videos;
pub mod update_media_status;
pub mod update_video;
pub mod upload_media;

pub use create_video::{CreateVideoCommand, CreateVideoHandler, CreateVideoResult};
pub use delete_video::{DeleteVideoCommand, DeleteVideoHandler};
pub use get_media::{GetMediaHandler, GetMediaQuery, GetMediaResult, MediaOutput};
pub use get_video::{
    AudioVideoMediaOutput, GetVideoHandler, GetVideoQuery, GetVideoResult, ImageMediaOutput,
    VideoOutput,
};
pub use list_videos::{ListVideosHandler, ListVideosQuery, ListVideosResult, VideoListOutput};
pub use update_media_status::{
    UpdateMediaStatusCommand, UpdateMediaStatusHandler, UpdateMediaStatusResult,
};
pub use update_video::{UpdateVideoCommand, UpdateVideoHandler, UpdateVideoResult};
pub use upload_media::{UploadMediaCommand, UploadMediaHandler, UploadMediaResult};
