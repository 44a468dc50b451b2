use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{LifecycleError, PayloadKind};
use crate::protocol::client_events::{ClientEvent, Event, TextInput};
use crate::protocol::models::{AudioInputConfiguration, ContentType, Role};
use crate::Result;

use super::factory::EventFactory;

/// Lifecycle position of a session or prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    NotStarted,
    Started,
    Ended,
}

#[derive(Debug, Default)]
struct PromptState {
    ended: bool,
    open: BTreeMap<String, ContentType>,
}

/// Enforces event ordering for one session.
///
/// Every event goes through [`apply`](Self::apply), which either records the
/// transition or rejects it with a [`LifecycleError`] and leaves the state
/// untouched. The typed helpers build the event with an [`EventFactory`] and
/// apply it in one step.
///
/// A `sessionEnd` is accepted while prompts or contents are still open so an
/// orchestrator can abort a session; whatever was open is discarded.
#[derive(Debug, Default)]
pub struct SessionTracker {
    factory: EventFactory,
    session: Stage,
    prompts: HashMap<String, PromptState>,
    surfaced_tool_uses: HashSet<String>,
    require_known_tool_use: bool,
}

impl SessionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_factory(factory: EventFactory) -> Self {
        Self {
            factory,
            ..Self::default()
        }
    }

    /// Reject tool results whose `toolUseId` was not first passed to
    /// [`expect_tool_use`](Self::expect_tool_use). Each id answers once.
    #[must_use]
    pub const fn with_tool_use_tracking(mut self) -> Self {
        self.require_known_tool_use = true;
        self
    }

    #[must_use]
    pub const fn factory(&self) -> &EventFactory {
        &self.factory
    }

    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.session
    }

    #[must_use]
    pub fn prompt_stage(&self, prompt_name: &str) -> Stage {
        match self.prompts.get(prompt_name) {
            None => Stage::NotStarted,
            Some(state) if state.ended => Stage::Ended,
            Some(_) => Stage::Started,
        }
    }

    /// Content units currently open in `prompt_name`, by name.
    pub fn open_contents(&self, prompt_name: &str) -> impl Iterator<Item = (&str, ContentType)> {
        self.prompts
            .get(prompt_name)
            .into_iter()
            .flat_map(|state| state.open.iter().map(|(name, kind)| (name.as_str(), *kind)))
    }

    /// Record a tool invocation surfaced by the backend so its result can be sent.
    ///
    /// Ignored unless tool-use tracking is on.
    pub fn expect_tool_use(&mut self, tool_use_id: impl Into<String>) {
        if !self.require_known_tool_use {
            return;
        }
        let tool_use_id = tool_use_id.into();
        tracing::debug!(tool_use_id = %tool_use_id, "expecting tool result");
        self.surfaced_tool_uses.insert(tool_use_id);
    }

    /// Check `event` against the current state and record it.
    ///
    /// # Errors
    /// Returns [`LifecycleError`] if the event is out of order; state is unchanged.
    #[allow(clippy::result_large_err)]
    pub fn apply(&mut self, event: &ClientEvent) -> Result<()> {
        match self.transition(event) {
            Ok(()) => {
                tracing::debug!(
                    kind = event.kind(),
                    prompt = event.prompt_name(),
                    content = event.content_name(),
                    "lifecycle transition"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(kind = event.kind(), error = %e, "rejected out-of-order event");
                Err(e.into())
            }
        }
    }

    /// Apply an externally built event and hand it back.
    ///
    /// # Errors
    /// Returns [`LifecycleError`] if the event is out of order.
    #[allow(clippy::result_large_err)]
    pub fn emit(&mut self, event: ClientEvent) -> Result<ClientEvent> {
        self.apply(&event)?;
        Ok(event)
    }

    /// # Errors
    /// Returns an error if the session was already started.
    #[allow(clippy::result_large_err)]
    pub fn session_start(&mut self) -> Result<ClientEvent> {
        let event = self.factory.session_start();
        self.emit(event)
    }

    /// # Errors
    /// Returns an error if the session is not running or the name was used.
    #[allow(clippy::result_large_err)]
    pub fn prompt_start(&mut self, prompt_name: &str) -> Result<ClientEvent> {
        let event = self.factory.prompt_start(prompt_name);
        self.emit(event)
    }

    /// # Errors
    /// Returns an error if the prompt is not open or the content name is taken.
    #[allow(clippy::result_large_err)]
    pub fn content_start_text(
        &mut self,
        prompt_name: &str,
        content_name: &str,
        role: Role,
    ) -> Result<ClientEvent> {
        let event = self.factory.content_start_text_as(prompt_name, content_name, role);
        self.emit(event)
    }

    /// # Errors
    /// Returns an error if the content unit is not an open `TEXT` unit.
    #[allow(clippy::result_large_err)]
    pub fn text_input(
        &mut self,
        prompt_name: &str,
        content_name: &str,
        text: &str,
    ) -> Result<ClientEvent> {
        let event = self.factory.text_input(prompt_name, content_name, text);
        self.emit(event)
    }

    /// Sends the configured system prompt.
    ///
    /// # Errors
    /// Returns an error if the content unit is not an open `TEXT` unit.
    #[allow(clippy::result_large_err)]
    pub fn system_prompt(&mut self, prompt_name: &str, content_name: &str) -> Result<ClientEvent> {
        let event = self.factory.system_prompt(prompt_name, content_name);
        self.emit(event)
    }

    /// # Errors
    /// Returns an error if the prompt is not open or the content name is taken.
    #[allow(clippy::result_large_err)]
    pub fn content_start_audio(
        &mut self,
        prompt_name: &str,
        content_name: &str,
        config: Option<AudioInputConfiguration>,
    ) -> Result<ClientEvent> {
        let event = match config {
            Some(config) => self
                .factory
                .content_start_audio_with(prompt_name, content_name, config),
            None => self.factory.content_start_audio(prompt_name, content_name),
        };
        self.emit(event)
    }

    /// # Errors
    /// Returns an error if the content unit is not an open `AUDIO` unit.
    #[allow(clippy::result_large_err)]
    pub fn audio_input(
        &mut self,
        prompt_name: &str,
        content_name: &str,
        content: &str,
    ) -> Result<ClientEvent> {
        let event = self.factory.audio_input(prompt_name, content_name, content);
        self.emit(event)
    }

    /// # Errors
    /// Returns an error if the prompt is not open, the content name is taken,
    /// or tool-use tracking is on and the id is unknown.
    #[allow(clippy::result_large_err)]
    pub fn content_start_tool(
        &mut self,
        prompt_name: &str,
        content_name: &str,
        tool_use_id: &str,
    ) -> Result<ClientEvent> {
        let event = self
            .factory
            .content_start_tool(prompt_name, content_name, tool_use_id);
        self.emit(event)
    }

    /// # Errors
    /// Returns an error if the content unit is not an open `TOOL` unit.
    #[allow(clippy::result_large_err)]
    pub fn text_input_tool(
        &mut self,
        prompt_name: &str,
        content_name: &str,
        content: &str,
    ) -> Result<ClientEvent> {
        let event = self.factory.text_input_tool(prompt_name, content_name, content);
        self.emit(event)
    }

    /// # Errors
    /// Returns an error if the content unit is not open.
    #[allow(clippy::result_large_err)]
    pub fn content_end(&mut self, prompt_name: &str, content_name: &str) -> Result<ClientEvent> {
        let event = self.factory.content_end(prompt_name, content_name);
        self.emit(event)
    }

    /// # Errors
    /// Returns an error if the prompt is not open or still has open content.
    #[allow(clippy::result_large_err)]
    pub fn prompt_end(&mut self, prompt_name: &str) -> Result<ClientEvent> {
        let event = self.factory.prompt_end(prompt_name);
        self.emit(event)
    }

    /// # Errors
    /// Returns an error if the session is not running.
    #[allow(clippy::result_large_err)]
    pub fn session_end(&mut self) -> Result<ClientEvent> {
        let event = self.factory.session_end();
        self.emit(event)
    }

    fn transition(&mut self, event: &ClientEvent) -> std::result::Result<(), LifecycleError> {
        if let Event::SessionStart(_) = event.event {
            if self.session != Stage::NotStarted {
                return Err(match self.session {
                    Stage::Ended => LifecycleError::SessionEnded,
                    _ => LifecycleError::SessionAlreadyStarted,
                });
            }
        } else {
            match self.session {
                Stage::NotStarted => return Err(LifecycleError::SessionNotStarted),
                Stage::Ended => return Err(LifecycleError::SessionEnded),
                Stage::Started => {}
            }
        }

        match &event.event {
            Event::SessionStart(_) => self.session = Stage::Started,
            Event::PromptStart(start) => {
                if self.prompts.contains_key(&start.prompt_name) {
                    return Err(LifecycleError::DuplicatePrompt(start.prompt_name.clone()));
                }
                self.prompts
                    .insert(start.prompt_name.clone(), PromptState::default());
            }
            Event::ContentStart(start) => {
                let prompt = open_prompt(&mut self.prompts, &start.prompt_name)?;
                if prompt.open.contains_key(&start.content_name) {
                    return Err(LifecycleError::DuplicateContent {
                        prompt: start.prompt_name.clone(),
                        content: start.content_name.clone(),
                    });
                }
                if let Some(tool_use_id) = start.kind.tool_use_id() {
                    let known = self.surfaced_tool_uses.contains(tool_use_id);
                    if self.require_known_tool_use && !known {
                        return Err(LifecycleError::UnknownToolUse(tool_use_id.to_string()));
                    }
                    self.surfaced_tool_uses.remove(tool_use_id);
                }
                prompt
                    .open
                    .insert(start.content_name.clone(), start.content_type());
            }
            Event::TextInput(input) => {
                let kind = text_payload_kind(input);
                self.check_payload(&input.prompt_name, &input.content_name, kind)?;
            }
            Event::AudioInput(input) => {
                self.check_payload(&input.prompt_name, &input.content_name, PayloadKind::AudioInput)?;
            }
            Event::ContentEnd(end) => {
                let prompt = open_prompt(&mut self.prompts, &end.prompt_name)?;
                if prompt.open.remove(&end.content_name).is_none() {
                    return Err(LifecycleError::UnknownContent {
                        prompt: end.prompt_name.clone(),
                        content: end.content_name.clone(),
                    });
                }
            }
            Event::PromptEnd(end) => {
                let prompt = open_prompt(&mut self.prompts, &end.prompt_name)?;
                if let Some(content) = prompt.open.keys().next() {
                    return Err(LifecycleError::ContentStillOpen {
                        prompt: end.prompt_name.clone(),
                        content: content.clone(),
                    });
                }
                prompt.ended = true;
            }
            Event::SessionEnd(_) => {
                for (name, prompt) in &mut self.prompts {
                    if !prompt.ended {
                        tracing::warn!(
                            prompt = %name,
                            open_contents = prompt.open.len(),
                            "session ended with prompt still open"
                        );
                        prompt.open.clear();
                        prompt.ended = true;
                    }
                }
                self.surfaced_tool_uses.clear();
                self.session = Stage::Ended;
            }
        }
        Ok(())
    }

    fn check_payload(
        &mut self,
        prompt_name: &str,
        content_name: &str,
        kind: PayloadKind,
    ) -> std::result::Result<(), LifecycleError> {
        let prompt = open_prompt(&mut self.prompts, prompt_name)?;
        let Some(&expected) = prompt.open.get(content_name) else {
            return Err(LifecycleError::UnknownContent {
                prompt: prompt_name.to_string(),
                content: content_name.to_string(),
            });
        };
        if kind.content_type() != expected {
            return Err(LifecycleError::PayloadMismatch {
                content: content_name.to_string(),
                expected,
                got: kind,
            });
        }
        Ok(())
    }
}

fn open_prompt<'a>(
    prompts: &'a mut HashMap<String, PromptState>,
    prompt_name: &str,
) -> std::result::Result<&'a mut PromptState, LifecycleError> {
    match prompts.get_mut(prompt_name) {
        None => Err(LifecycleError::UnknownPrompt(prompt_name.to_string())),
        Some(state) if state.ended => Err(LifecycleError::PromptEnded(prompt_name.to_string())),
        Some(state) => Ok(state),
    }
}

fn text_payload_kind(input: &TextInput) -> PayloadKind {
    if input.is_tool_result() {
        PayloadKind::ToolResult
    } else {
        PayloadKind::TextInput
    }
}
