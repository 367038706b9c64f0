use log::{debug, error, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger(level: log::LevelFilter) {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("catalog_admin_lib", level) // Our own records follow the configured level
            .filter_module("catalog_admin", level)
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .filter_module("mio", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log a use case execution and its outcome
    pub fn use_case(name: &str, video_id: &str, error: Option<&dyn std::fmt::Display>) {
        match error {
            None => info!("[usecase:{}] [videoId:{}] [outcome:ok]", name, video_id),
            Some(e) => warn!(
                "[usecase:{}] [videoId:{}] [outcome:failed] [error:{}]",
                name, video_id, e
            ),
        }
    }

    /// Log storage operations
    pub fn storage_operation(operation: &str, location: &str, bytes: Option<usize>) {
        match bytes {
            Some(size) => debug!("Storage: {} {} ({} bytes)", operation, location, size),
            None => debug!("Storage: {} {}", operation, location),
        }
    }

    /// Log an inbound encoder message
    pub fn listener_message(status: &str, payload: &str) {
        match status {
            "completed" => info!(
                "[message:video.listener.income] [status:{}] [payload:{}]",
                status, payload
            ),
            _ => error!(
                "[message:video.listener.income] [status:{}] [payload:{}]",
                status, payload
            ),
        }
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish(self) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        debug!("Performance: {} took {}ms", self.operation, duration);
        duration
    }
}
