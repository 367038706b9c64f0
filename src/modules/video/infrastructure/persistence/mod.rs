mod in_memory_video_gateway;

pub use in_memory_video_gateway::InMemoryVideoGateway;
