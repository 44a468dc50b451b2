use serde::{Deserialize, Serialize};

use super::{AudioInputConfiguration, ContentType, MediaTypeConfiguration, Role};

/// Opens a named content unit inside a prompt.
///
/// The variant fixes the unit's type and configuration until its `contentEnd`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentStart {
    pub prompt_name: String,
    pub content_name: String,
    #[serde(flatten)]
    pub kind: ContentKind,
}

impl ContentStart {
    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        self.kind.content_type()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentKind {
    #[serde(rename_all = "camelCase")]
    Text {
        interactive: bool,
        role: Role,
        text_input_configuration: MediaTypeConfiguration,
    },
    #[serde(rename_all = "camelCase")]
    Audio {
        interactive: bool,
        role: Role,
        audio_input_configuration: AudioInputConfiguration,
    },
    #[serde(rename_all = "camelCase")]
    Tool {
        interactive: bool,
        tool_result_input_configuration: ToolResultInputConfiguration,
    },
}

impl ContentKind {
    #[must_use]
    pub const fn text(role: Role) -> Self {
        Self::Text {
            interactive: true,
            role,
            text_input_configuration: MediaTypeConfiguration::TEXT_PLAIN,
        }
    }

    /// Microphone input is always spoken by the user.
    #[must_use]
    pub const fn audio(audio_input_configuration: AudioInputConfiguration) -> Self {
        Self::Audio {
            interactive: true,
            role: Role::User,
            audio_input_configuration,
        }
    }

    #[must_use]
    pub fn tool(tool_use_id: impl Into<String>) -> Self {
        Self::Tool {
            interactive: false,
            tool_result_input_configuration: ToolResultInputConfiguration::text(tool_use_id),
        }
    }

    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        match self {
            Self::Text { .. } => ContentType::Text,
            Self::Audio { .. } => ContentType::Audio,
            Self::Tool { .. } => ContentType::Tool,
        }
    }

    #[must_use]
    pub fn tool_use_id(&self) -> Option<&str> {
        match self {
            Self::Tool {
                tool_result_input_configuration,
                ..
            } => Some(&tool_result_input_configuration.tool_use_id),
            _ => None,
        }
    }
}

/// Binds a `TOOL` content unit to the invocation it answers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToolResultInputConfiguration {
    pub tool_use_id: String,
    #[serde(rename = "type")]
    pub result_type: ContentType,
    pub text_input_configuration: MediaTypeConfiguration,
}

impl ToolResultInputConfiguration {
    #[must_use]
    pub fn text(tool_use_id: impl Into<String>) -> Self {
        Self {
            tool_use_id: tool_use_id.into(),
            result_type: ContentType::Text,
            text_input_configuration: MediaTypeConfiguration::TEXT_PLAIN,
        }
    }
}
