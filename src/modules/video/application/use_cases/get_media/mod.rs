mod handler;
mod query;
mod result;

pub use handler::GetMediaHandler;
pub use query::GetMediaQuery;
pub use result::{GetMediaResult, MediaOutput};
