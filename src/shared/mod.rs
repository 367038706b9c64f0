// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns
pub mod config; // Environment driven configuration
pub mod domain; // Shared domain concepts (identifiers, events)
pub mod errors; // Shared error types
pub mod utils; // Shared utilities (logging)
pub mod validation; // Notification based validation kernel

pub use config::AppConfig;
