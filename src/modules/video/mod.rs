/// Video bounded context
///
/// The Video aggregate with its media slots, the use cases that store and
/// reconcile media, and the adapters they run on.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use domain::{Video, VideoGateway, VideoId, VideoMediaType, VideoMetadata};
