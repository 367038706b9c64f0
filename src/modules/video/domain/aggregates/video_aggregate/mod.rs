/// Video Aggregate Root
///
/// - `Video` is the only entry point for metadata and media slot changes
/// - `VideoMetadata` groups the fields replaced by `update`
/// - `VideoSnapshot` is the flat shape used by persistence adapters
mod metadata;
mod snapshot;
mod video;

pub use metadata::VideoMetadata;
pub use snapshot::VideoSnapshot;
pub use video::Video;
