mod video_events;

pub use video_events::VideoMediaCreated;
