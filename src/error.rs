use thiserror::Error;

use crate::protocol::models::ContentType;

/// Which kind of payload event was offered to an open content unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    TextInput,
    AudioInput,
    ToolResult,
}

impl PayloadKind {
    /// The content type a payload of this kind belongs to.
    #[must_use]
    pub const fn content_type(self) -> ContentType {
        match self {
            Self::TextInput => ContentType::Text,
            Self::AudioInput => ContentType::Audio,
            Self::ToolResult => ContentType::Tool,
        }
    }
}

impl std::fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TextInput => write!(f, "textInput"),
            Self::AudioInput => write!(f, "audioInput"),
            Self::ToolResult => write!(f, "textInput(TOOL)"),
        }
    }
}

/// Out-of-order or conflicting lifecycle transitions rejected by
/// [`SessionTracker`](crate::sdk::SessionTracker).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("session has not been started")]
    SessionNotStarted,

    #[error("session was already started")]
    SessionAlreadyStarted,

    #[error("session has ended")]
    SessionEnded,

    #[error("prompt {0:?} was already used in this session")]
    DuplicatePrompt(String),

    #[error("prompt {0:?} was never started")]
    UnknownPrompt(String),

    #[error("prompt {0:?} has ended")]
    PromptEnded(String),

    #[error("prompt {prompt:?} still has open content {content:?}")]
    ContentStillOpen { prompt: String, content: String },

    #[error("content {content:?} is already open in prompt {prompt:?}")]
    DuplicateContent { prompt: String, content: String },

    #[error("content {content:?} is not open in prompt {prompt:?}")]
    UnknownContent { prompt: String, content: String },

    #[error("content {content:?} is {expected} and cannot take {got}")]
    PayloadMismatch {
        content: String,
        expected: ContentType,
        got: PayloadKind,
    },

    #[error("tool use {0:?} was not surfaced by the backend or was already answered")]
    UnknownToolUse(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse or serialize JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Lifecycle violation: {0}")]
    Lifecycle(#[from] LifecycleError),
}

pub type Result<T> = std::result::Result<T, Error>;
