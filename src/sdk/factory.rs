use std::sync::Arc;

use crate::protocol::client_events::ClientEvent;
use crate::protocol::models::{
    AudioInputConfiguration, AudioOutputConfiguration, Defaults, InferenceConfiguration, Role,
    ToolConfiguration,
};

/// Builds protocol events, filling omitted arguments from a fixed set of
/// [`Defaults`].
///
/// The factory never changes after construction and keeps no history, so the
/// same call always yields the same event. Clones share the defaults.
#[derive(Debug, Clone, Default)]
pub struct EventFactory {
    defaults: Arc<Defaults>,
}

impl EventFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_defaults(defaults: Defaults) -> Self {
        Self {
            defaults: Arc::new(defaults),
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    #[must_use]
    pub fn session_start(&self) -> ClientEvent {
        ClientEvent::session_start(self.defaults.inference_configuration)
    }

    #[must_use]
    pub const fn session_start_with(&self, config: InferenceConfiguration) -> ClientEvent {
        ClientEvent::session_start(config)
    }

    /// Starts a prompt with the default output audio format and tool catalog.
    #[must_use]
    pub fn prompt_start(&self, prompt_name: impl Into<String>) -> ClientEvent {
        ClientEvent::prompt_start(
            prompt_name,
            self.defaults.audio_output_configuration.clone(),
            self.defaults.tool_configuration.clone(),
        )
    }

    #[must_use]
    pub fn prompt_start_with(
        &self,
        prompt_name: impl Into<String>,
        audio_output: Option<AudioOutputConfiguration>,
        tools: Option<ToolConfiguration>,
    ) -> ClientEvent {
        ClientEvent::prompt_start(
            prompt_name,
            audio_output.unwrap_or_else(|| self.defaults.audio_output_configuration.clone()),
            tools.unwrap_or_else(|| self.defaults.tool_configuration.clone()),
        )
    }

    /// Text content with the `SYSTEM` role.
    #[must_use]
    pub fn content_start_text(
        &self,
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
    ) -> ClientEvent {
        ClientEvent::content_start_text(prompt_name, content_name, Role::System)
    }

    #[must_use]
    pub fn content_start_text_as(
        &self,
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
        role: Role,
    ) -> ClientEvent {
        ClientEvent::content_start_text(prompt_name, content_name, role)
    }

    /// `textInput` carrying the configured system prompt.
    #[must_use]
    pub fn system_prompt(
        &self,
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
    ) -> ClientEvent {
        ClientEvent::text_input(prompt_name, content_name, self.defaults.system_prompt.as_str())
    }

    #[must_use]
    pub fn text_input(
        &self,
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
        text: impl Into<String>,
    ) -> ClientEvent {
        ClientEvent::text_input(prompt_name, content_name, text)
    }

    #[must_use]
    pub fn content_start_audio(
        &self,
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
    ) -> ClientEvent {
        ClientEvent::content_start_audio(
            prompt_name,
            content_name,
            self.defaults.audio_input_configuration,
        )
    }

    #[must_use]
    pub fn content_start_audio_with(
        &self,
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
        config: AudioInputConfiguration,
    ) -> ClientEvent {
        ClientEvent::content_start_audio(prompt_name, content_name, config)
    }

    #[must_use]
    pub fn audio_input(
        &self,
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
        content: impl Into<String>,
    ) -> ClientEvent {
        ClientEvent::audio_input(prompt_name, content_name, content)
    }

    #[must_use]
    pub fn content_start_tool(
        &self,
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
        tool_use_id: impl Into<String>,
    ) -> ClientEvent {
        ClientEvent::content_start_tool(prompt_name, content_name, tool_use_id)
    }

    #[must_use]
    pub fn text_input_tool(
        &self,
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
        content: impl Into<String>,
    ) -> ClientEvent {
        ClientEvent::text_input_tool(prompt_name, content_name, content)
    }

    #[must_use]
    pub fn content_end(
        &self,
        prompt_name: impl Into<String>,
        content_name: impl Into<String>,
    ) -> ClientEvent {
        ClientEvent::content_end(prompt_name, content_name)
    }

    #[must_use]
    pub fn prompt_end(&self, prompt_name: impl Into<String>) -> ClientEvent {
        ClientEvent::prompt_end(prompt_name)
    }

    #[must_use]
    pub const fn session_end(&self) -> ClientEvent {
        ClientEvent::session_end()
    }

    /// The configured seed history replayed into `prompt_name`.
    #[must_use]
    pub fn seed_history(
        &self,
        prompt_name: &str,
        content_prefix: &str,
    ) -> Vec<ClientEvent> {
        super::history::history_events(prompt_name, content_prefix, &self.defaults.chat_history)
    }
}
