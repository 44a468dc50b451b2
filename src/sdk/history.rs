use crate::protocol::client_events::ClientEvent;
use crate::protocol::models::ChatMessage;

/// Replay prior turns into a prompt as closed text content units.
///
/// Each message becomes `contentStart(TEXT, role)`, `textInput`, `contentEnd`
/// under the content name `{content_prefix}-{index}`.
#[must_use]
pub fn history_events(
    prompt_name: &str,
    content_prefix: &str,
    messages: &[ChatMessage],
) -> Vec<ClientEvent> {
    let mut events = Vec::with_capacity(messages.len() * 3);
    for (index, message) in messages.iter().enumerate() {
        let content_name = format!("{content_prefix}-{index}");
        events.push(ClientEvent::content_start_text(
            prompt_name,
            content_name.as_str(),
            message.role,
        ));
        events.push(ClientEvent::text_input(
            prompt_name,
            content_name.as_str(),
            message.content.as_str(),
        ));
        events.push(ClientEvent::content_end(prompt_name, content_name));
    }
    events
}
