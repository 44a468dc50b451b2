use serde::{Deserialize, Serialize};

/// Speaker of a text content unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    System,
    User,
    Assistant,
    Tool,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "SYSTEM"),
            Self::User => write!(f, "USER"),
            Self::Assistant => write!(f, "ASSISTANT"),
            Self::Tool => write!(f, "TOOL"),
        }
    }
}

/// Declared `type` of a content unit, fixed at `contentStart`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Text,
    Audio,
    Tool,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "TEXT"),
            Self::Audio => write!(f, "AUDIO"),
            Self::Tool => write!(f, "TOOL"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MediaType {
    #[serde(rename = "text/plain")]
    TextPlain,
    #[serde(rename = "application/json")]
    ApplicationJson,
    #[serde(rename = "audio/lpcm")]
    AudioLpcm,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TextPlain => write!(f, "text/plain"),
            Self::ApplicationJson => write!(f, "application/json"),
            Self::AudioLpcm => write!(f, "audio/lpcm"),
        }
    }
}

/// `{ "mediaType": ... }` blocks used for text and tool-use configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MediaTypeConfiguration {
    pub media_type: MediaType,
}

impl MediaTypeConfiguration {
    pub const TEXT_PLAIN: Self = Self {
        media_type: MediaType::TextPlain,
    };
    pub const APPLICATION_JSON: Self = Self {
        media_type: MediaType::ApplicationJson,
    };
}

/// Rejects identifiers the backend cannot route: empty or whitespace-only.
///
/// # Errors
/// Returns `InvalidArgument` naming `field` when `value` is blank.
#[allow(clippy::result_large_err)]
pub fn validate_identifier(field: &str, value: &str) -> crate::Result<()> {
    if value.trim().is_empty() {
        return Err(crate::Error::InvalidArgument(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}
