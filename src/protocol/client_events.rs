//! Events the client sends over the session's input stream.
//!
//! Every event serializes as `{"event": {"<kind>": {...}}}`. The constructors
//! on [`ClientEvent`] are total: they shape whatever identifiers they are
//! given, and ordering is left to the caller (or to
//! [`SessionTracker`](crate::sdk::SessionTracker)).

use base64::Engine as _;
use base64::engine::general_purpose;
use serde::{Deserialize, Serialize};

use super::models::{
    AudioInputConfiguration, AudioOutputConfiguration, ContentKind, ContentStart,
    InferenceConfiguration, MediaTypeConfiguration, Role, ToolConfiguration, validate_identifier,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientEvent {
    pub event: Event,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Event {
    SessionStart(SessionStart),
    PromptStart(Box<PromptStart>),
    ContentStart(ContentStart),
    TextInput(TextInput),
    AudioInput(AudioInput),
    ContentEnd(ContentEnd),
    PromptEnd(PromptEnd),
    SessionEnd(SessionEnd),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionStart {
    pub inference_configuration: InferenceConfiguration,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PromptStart {
    pub prompt_name: String,
    pub text_output_configuration: MediaTypeConfiguration,
    pub audio_output_configuration: AudioOutputConfiguration,
    pub tool_use_output_configuration: MediaTypeConfiguration,
    pub tool_configuration: ToolConfiguration,
}

/// Text payload. `role` is only present on tool results, where it is `TOOL`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    pub prompt_name: String,
    pub content_name: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl TextInput {
    #[must_use]
    pub fn is_tool_result(&self) -> bool {
        self.role == Some(Role::Tool)
    }
}

/// One base64 chunk of an `AUDIO` content unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AudioInput {
    pub prompt_name: String,
    pub content_name: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentEnd {
    pub prompt_name: String,
    pub content_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PromptEnd {
    pub prompt_name: String,
}

/// Serializes as an empty object.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SessionEnd {}

impl From<Event> for ClientEvent {
    fn from(event: Event) -> Self {
        Self { event }
    }
}

impl ClientEvent {
    #[must_use]
    pub const fn session_start(inference_configuration: InferenceConfiguration) -> Self {
        Self {
            event: Event::SessionStart(SessionStart {
                inference_configuration,
            }),
        }
    }

    #[must_use]
    pub fn prompt_start(
        prompt_name: impl Into<String>,
        audio_output_configuration: AudioOutputConfiguration,
        tool_configuration: ToolConfiguration,
    ) -> Self {
        Event::PromptStart(Box::new(PromptStart {
            prompt_name: prompt_name.into(),
            text_output_configuration: MediaTypeConfiguration::TEXT_PLAIN,
            audio_output_configuration,
            tool_use_output_configuration: MediaTypeConfiguration::APPLICATION_JSON,
            tool_configuration,
        }))
        .into()
    }

    #[must_use]
    pub fn content_start_text(
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self::content_start(prompt_name, content_name, ContentKind::text(role))
    }

    #[must_use]
    pub fn text_input(
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Event::TextInput(TextInput {
            prompt_name: prompt_name.into(),
            content_name: content_name.into(),
            content: content.into(),
            role: None,
        })
        .into()
    }

    #[must_use]
    pub fn content_start_audio(
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
        audio_input_configuration: AudioInputConfiguration,
    ) -> Self {
        Self::content_start(
            prompt_name,
            content_name,
            ContentKind::audio(audio_input_configuration),
        )
    }

    /// `content` must already be base64 encoded.
    #[must_use]
    pub fn audio_input(
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Event::AudioInput(AudioInput {
            prompt_name: prompt_name.into(),
            content_name: content_name.into(),
            content: content.into(),
        })
        .into()
    }

    #[must_use]
    pub fn content_start_tool(
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
        tool_use_id: impl Into<String>,
    ) -> Self {
        Self::content_start(prompt_name, content_name, ContentKind::tool(tool_use_id))
    }

    #[must_use]
    pub fn text_input_tool(
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Event::TextInput(TextInput {
            prompt_name: prompt_name.into(),
            content_name: content_name.into(),
            content: content.into(),
            role: Some(Role::Tool),
        })
        .into()
    }

    #[must_use]
    pub fn content_end(prompt_name: impl Into<String>, content_name: impl Into<String>) -> Self {
        Event::ContentEnd(ContentEnd {
            prompt_name: prompt_name.into(),
            content_name: content_name.into(),
        })
        .into()
    }

    #[must_use]
    pub fn prompt_end(prompt_name: impl Into<String>) -> Self {
        Event::PromptEnd(PromptEnd {
            prompt_name: prompt_name.into(),
        })
        .into()
    }

    #[must_use]
    pub const fn session_end() -> Self {
        Self {
            event: Event::SessionEnd(SessionEnd {}),
        }
    }

    fn content_start(
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
        kind: ContentKind,
    ) -> Self {
        Event::ContentStart(ContentStart {
            prompt_name: prompt_name.into(),
            content_name: content_name.into(),
            kind,
        })
        .into()
    }

    /// Wire name of the event, e.g. `"contentStart"`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match &self.event {
            Event::SessionStart(_) => "sessionStart",
            Event::PromptStart(_) => "promptStart",
            Event::ContentStart(_) => "contentStart",
            Event::TextInput(_) => "textInput",
            Event::AudioInput(_) => "audioInput",
            Event::ContentEnd(_) => "contentEnd",
            Event::PromptEnd(_) => "promptEnd",
            Event::SessionEnd(_) => "sessionEnd",
        }
    }

    #[must_use]
    pub fn prompt_name(&self) -> Option<&str> {
        match &self.event {
            Event::PromptStart(e) => Some(&e.prompt_name),
            Event::ContentStart(e) => Some(&e.prompt_name),
            Event::TextInput(e) => Some(&e.prompt_name),
            Event::AudioInput(e) => Some(&e.prompt_name),
            Event::ContentEnd(e) => Some(&e.prompt_name),
            Event::PromptEnd(e) => Some(&e.prompt_name),
            Event::SessionStart(_) | Event::SessionEnd(_) => None,
        }
    }

    #[must_use]
    pub fn content_name(&self) -> Option<&str> {
        match &self.event {
            Event::ContentStart(e) => Some(&e.content_name),
            Event::TextInput(e) => Some(&e.content_name),
            Event::AudioInput(e) => Some(&e.content_name),
            Event::ContentEnd(e) => Some(&e.content_name),
            _ => None,
        }
    }

    /// Check the event's own shape: identifiers present, configuration in
    /// range, audio payload valid base64. Ordering is not checked.
    ///
    /// # Errors
    /// Returns `InvalidArgument` describing the first malformed field.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(prompt_name) = self.prompt_name() {
            validate_identifier("promptName", prompt_name)?;
        }
        if let Some(content_name) = self.content_name() {
            validate_identifier("contentName", content_name)?;
        }
        match &self.event {
            Event::SessionStart(e) => e.inference_configuration.validate(),
            Event::PromptStart(e) => {
                e.audio_output_configuration.validate()?;
                e.tool_configuration.validate()
            }
            Event::ContentStart(e) => match &e.kind {
                ContentKind::Audio {
                    audio_input_configuration,
                    ..
                } => audio_input_configuration.validate(),
                ContentKind::Tool {
                    tool_result_input_configuration,
                    ..
                } => validate_identifier(
                    "toolUseId",
                    &tool_result_input_configuration.tool_use_id,
                ),
                ContentKind::Text { .. } => Ok(()),
            },
            Event::AudioInput(e) => validate_base64_audio(&e.content),
            Event::TextInput(_) | Event::ContentEnd(_) | Event::PromptEnd(_) | Event::SessionEnd(_) => {
                Ok(())
            }
        }
    }
}

#[allow(clippy::result_large_err)]
fn validate_base64_audio(content: &str) -> crate::Result<()> {
    if content.is_empty() {
        return Err(crate::Error::InvalidArgument(
            "audioInput content must not be empty".to_string(),
        ));
    }
    general_purpose::STANDARD.decode(content).map_err(|e| {
        crate::Error::InvalidArgument(format!("audioInput content is not valid base64: {e}"))
    })?;
    Ok(())
}
