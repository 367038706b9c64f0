/// Consumer of encoder results
///
/// Each queue message is a JSON `VideoEncoderResult`. Completed results are
/// applied through the update-media-status use case; error results are only
/// logged and leave the video untouched.
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::models::VideoEncoderResult;
use crate::modules::video::application::use_cases::{
    UpdateMediaStatusCommand, UpdateMediaStatusResult,
};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    utils::logger::LogContext,
};
use crate::log_info;

pub type UpdateMediaStatusUseCase =
    dyn UseCase<UpdateMediaStatusCommand, UpdateMediaStatusResult> + Send + Sync;

pub struct VideoEncoderListener {
    update_media_status: Arc<UpdateMediaStatusUseCase>,
}

impl VideoEncoderListener {
    pub fn new(update_media_status: Arc<UpdateMediaStatusUseCase>) -> Self {
        Self {
            update_media_status,
        }
    }

    /// Handle one raw message. Returns the reconciliation outcome for
    /// completed results and `None` for error results.
    pub async fn on_message(&self, payload: &str) -> AppResult<Option<UpdateMediaStatusResult>> {
        let message = match serde_json::from_str::<VideoEncoderResult>(payload) {
            Ok(message) => message,
            Err(e) => {
                LogContext::listener_message("unknown", payload);
                return Err(AppError::SerializationError(format!(
                    "Unrecognized encoder message: {}",
                    e
                )));
            }
        };

        match message {
            VideoEncoderResult::Completed(completed) => {
                LogContext::listener_message("completed", payload);

                let command = UpdateMediaStatusCommand::completed(
                    completed.id,
                    completed.video.resource_id,
                    completed.video.encoder_video_folder,
                    completed.video.file_path,
                );
                let result = self.update_media_status.execute(command).await?;
                Ok(Some(result))
            }
            VideoEncoderResult::Error(_) => {
                LogContext::listener_message("error", payload);
                Ok(None)
            }
        }
    }

    /// Consume `receiver` until it closes or `cancel` fires. A failing
    /// message is logged and does not stop the loop.
    pub async fn run(&self, mut receiver: mpsc::Receiver<String>, cancel: CancellationToken) {
        log_info!("Encoder listener started");

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    log_info!("Encoder listener stopped");
                    break;
                }
                message = receiver.recv() => {
                    let Some(payload) = message else {
                        log_info!("Encoder queue closed");
                        break;
                    };

                    if let Err(e) = self.on_message(&payload).await {
                        LogContext::error_with_context(&e, "Encoder message failed");
                    }
                }
            }
        }
    }
}
