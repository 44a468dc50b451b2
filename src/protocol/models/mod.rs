pub mod audio;
pub mod common;
pub mod content;
pub mod defaults;
pub mod history;
pub mod inference;
pub mod tools;

pub use audio::{AudioEncoding, AudioInputConfiguration, AudioOutputConfiguration, AudioType};
pub use common::{ContentType, MediaType, MediaTypeConfiguration, Role, validate_identifier};
pub use content::{ContentKind, ContentStart, ToolResultInputConfiguration};
pub use defaults::{
    DEFAULT_AUDIO_INPUT_CONFIGURATION, DEFAULT_AUDIO_OUTPUT_CONFIGURATION, DEFAULT_CHAT_HISTORY,
    DEFAULT_INFERENCE_CONFIGURATION, DEFAULT_SYSTEM_PROMPT, DEFAULT_TOOL_CONFIGURATION, Defaults,
};
pub use history::ChatMessage;
pub use inference::InferenceConfiguration;
pub use tools::{InputSchema, Tool, ToolConfiguration, ToolSpec};
