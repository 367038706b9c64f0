mod handler;
mod query;
mod result;

pub use handler::ListVideosHandler;
pub use query::ListVideosQuery;
pub use result::{ListVideosResult, VideoListOutput};
