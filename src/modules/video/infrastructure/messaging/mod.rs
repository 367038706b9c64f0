mod encoder_listener;
pub mod models;
mod queue_event_publisher;

pub use encoder_listener::{UpdateMediaStatusUseCase, VideoEncoderListener};
pub use models::VideoEncoderResult;
pub use queue_event_publisher::QueueEventPublisher;
