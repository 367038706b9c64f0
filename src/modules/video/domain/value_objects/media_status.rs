use serde::{Deserialize, Serialize};

/// Processing state of an audio/video slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

impl MediaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaStatus::Pending => "PENDING",
            MediaStatus::Processing => "PROCESSING",
            MediaStatus::Completed => "COMPLETED",
            MediaStatus::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for MediaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MediaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(MediaStatus::Pending),
            "PROCESSING" => Ok(MediaStatus::Processing),
            "COMPLETED" => Ok(MediaStatus::Completed),
            "ERROR" => Ok(MediaStatus::Error),
            _ => Err(format!("Invalid media status: {}", s)),
        }
    }
}
