mod command;
mod handler;
mod result;

pub use command::UpdateMediaStatusCommand;
pub use handler::UpdateMediaStatusHandler;
pub use result::UpdateMediaStatusResult;
