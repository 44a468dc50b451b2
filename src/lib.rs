#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

pub mod protocol;
pub mod error;
pub mod sdk;

pub use error::{Error, LifecycleError, PayloadKind, Result};
pub use sdk::{
    AudioChunker, EventFactory, SessionTracker, Stage, ToolRegistry, ToolResult, history_events,
};
pub use protocol::client_events::{
    AudioInput, ClientEvent, ContentEnd, Event, PromptEnd, PromptStart, SessionEnd, SessionStart,
    TextInput,
};
pub use protocol::models::{
    AudioEncoding, AudioInputConfiguration, AudioOutputConfiguration, AudioType, ChatMessage,
    ContentKind, ContentStart, ContentType, Defaults, InferenceConfiguration, InputSchema,
    MediaType, MediaTypeConfiguration, Role, Tool, ToolConfiguration, ToolResultInputConfiguration,
    ToolSpec,
};

use std::borrow::Cow;

const TRACE_LOG_MAX_BYTES: usize = 1024;
const TRACE_TRUNCATE_SUFFIX: &str = "... (truncated)";

/// Validate an event's shape and serialize it for the transport.
///
/// # Errors
/// Returns an error if the event is malformed or serialization fails.
#[allow(clippy::result_large_err)]
pub fn to_json(event: &ClientEvent) -> Result<String> {
    event.validate()?;
    let json = serde_json::to_string(event)?;
    tracing::trace!("Encoded {} event: {}", event.kind(), safe_truncate(&json, TRACE_LOG_MAX_BYTES));
    Ok(json)
}

/// Parse a serialized event, e.g. when replaying a recorded stream.
///
/// # Errors
/// Returns an error if `json` is not a well-formed event.
#[allow(clippy::result_large_err)]
pub fn from_json(json: &str) -> Result<ClientEvent> {
    tracing::trace!("Decoding event: {}", safe_truncate(json, TRACE_LOG_MAX_BYTES));
    Ok(serde_json::from_str(json)?)
}

fn safe_truncate(s: &str, max_bytes: usize) -> Cow<'_, str> {
    if s.len() <= max_bytes {
        return Cow::Borrowed(s);
    }

    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!(
        "{} {} {} bytes",
        &s[..end],
        TRACE_TRUNCATE_SUFFIX,
        s.len() - end
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert!(matches!(safe_truncate("abc", 8), Cow::Borrowed("abc")));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let s = "ééé";
        let out = safe_truncate(s, 3);
        assert!(out.starts_with('é'));
        assert!(out.ends_with("4 bytes"));
    }
}
