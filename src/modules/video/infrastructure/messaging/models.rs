//! Wire format of the encoder result queue
use serde::{Deserialize, Serialize};

/// Message published by the encoder, tagged by `status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoEncoderResult {
    Completed(VideoEncoderCompleted),
    Error(VideoEncoderError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEncoderCompleted {
    /// Video id
    pub id: String,
    pub output_bucket: String,
    pub video: VideoEncoderMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEncoderMetadata {
    pub encoder_video_folder: String,
    pub resource_id: String,
    pub file_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEncoderError {
    pub message: VideoEncoderMessage,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEncoderMessage {
    pub resource_id: String,
    pub file_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_completed_message() {
        let json = r#"{
            "status": "COMPLETED",
            "id": "video-1",
            "outputBucket": "codeflix",
            "video": {
                "encoderVideoFolder": "enc/video-1",
                "resourceId": "media-1",
                "filePath": "a.mp4"
            }
        }"#;

        let parsed: VideoEncoderResult = serde_json::from_str(json).unwrap();

        let VideoEncoderResult::Completed(completed) = parsed else {
            panic!("expected a completed message");
        };
        assert_eq!(completed.id, "video-1");
        assert_eq!(completed.video.encoder_video_folder, "enc/video-1");
        assert_eq!(completed.video.resource_id, "media-1");
    }

    #[test]
    fn test_parses_error_message() {
        let json = r#"{
            "status": "ERROR",
            "message": {"resourceId": "media-1", "filePath": "raw/a.mp4"},
            "error": "codec not supported"
        }"#;

        let parsed: VideoEncoderResult = serde_json::from_str(json).unwrap();

        assert_eq!(
            parsed,
            VideoEncoderResult::Error(VideoEncoderError {
                message: VideoEncoderMessage {
                    resource_id: "media-1".to_string(),
                    file_path: "raw/a.mp4".to_string(),
                },
                error: "codec not supported".to_string(),
            })
        );
    }

    #[test]
    fn test_rejects_unknown_status() {
        let json = r#"{"status": "QUEUED", "id": "video-1"}"#;
        assert!(serde_json::from_str::<VideoEncoderResult>(json).is_err());
    }
}
