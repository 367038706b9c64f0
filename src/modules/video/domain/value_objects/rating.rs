use serde::{Deserialize, Serialize};

/// Age rating of a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "ER")]
    Er,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "10")]
    Age10,
    #[serde(rename = "12")]
    Age12,
    #[serde(rename = "14")]
    Age14,
    #[serde(rename = "16")]
    Age16,
    #[serde(rename = "18")]
    Age18,
}

impl Rating {
    pub const ALL: [Rating; 7] = [
        Rating::Er,
        Rating::L,
        Rating::Age10,
        Rating::Age12,
        Rating::Age14,
        Rating::Age16,
        Rating::Age18,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Er => "ER",
            Rating::L => "L",
            Rating::Age10 => "10",
            Rating::Age12 => "12",
            Rating::Age14 => "14",
            Rating::Age16 => "16",
            Rating::Age18 => "18",
        }
    }

    /// Parse a rating name. Unknown values yield `None` so the validator,
    /// not the parser, reports them.
    pub fn of(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
