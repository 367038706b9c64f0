mod command;
mod handler;
mod result;

pub use command::UploadMediaCommand;
pub use handler::UploadMediaHandler;
pub use result::UploadMediaResult;
