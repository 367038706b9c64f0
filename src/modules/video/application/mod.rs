pub mod media_storage;
#[cfg(test)]
pub(crate) mod mocks;
pub mod ports;
pub mod related_aggregates;
pub mod use_cases;
pub mod video_fields;

// Re-export commonly used types
pub use media_storage::VideoResources;
pub use ports::EventPublisher;
pub use related_aggregates::RelatedAggregatesValidator;
pub use use_cases::*;
pub use video_fields::VideoFields;
