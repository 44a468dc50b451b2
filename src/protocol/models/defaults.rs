//! Built-in configuration presets.
//!
//! The presets are built once and shared read-only. [`Defaults`] bundles them
//! into an owned value so a deployment can replace any of them, e.g. from a
//! JSON file, without changing call sites.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::{
    AudioEncoding, AudioInputConfiguration, AudioOutputConfiguration, AudioType, ChatMessage,
    InferenceConfiguration, MediaType, ToolConfiguration, ToolSpec,
};

pub const DEFAULT_INFERENCE_CONFIGURATION: InferenceConfiguration = InferenceConfiguration {
    max_tokens: 2048,
    top_p: 0.95,
    temperature: 0.7,
};

pub const DEFAULT_AUDIO_INPUT_CONFIGURATION: AudioInputConfiguration =
    AudioInputConfiguration::lpcm(16_000, 1);

pub const DEFAULT_VOICE_ID: &str = "matthew";

pub static DEFAULT_AUDIO_OUTPUT_CONFIGURATION: LazyLock<AudioOutputConfiguration> =
    LazyLock::new(|| AudioOutputConfiguration {
        media_type: MediaType::AudioLpcm,
        sample_rate_hertz: 24_000,
        sample_size_bits: 16,
        channel_count: 1,
        voice_id: DEFAULT_VOICE_ID.to_string(),
        encoding: AudioEncoding::Base64,
        audio_type: AudioType::Speech,
    });

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a Wind Turbine and Solar Panel Assistant capable of answering questions about them. The user and you will engage in a spoken dialog exchanging the transcripts of a natural real-time conversation. You are provided with a getTurbineSolarInfo tool that's capable of answering user's questions about wind turbines and solar panels. DO NOT expect user to provide the monthly electricity cost of a company or wind turbine foundation issues based on a turbine's image as the tool is capable of fetching the necessary details. Typically, when user asks about a turbine details, its in the form of WT-001, WT-002 etc until WT-050. Keep your responses short, generally two or three sentences for chatty scenarios. You may start each of your sentences with emotions in square brackets such as [amused], [neutral] or any other stage direction such as [joyful]. Only use a single pair of square brackets for indicating a stage command.";

pub const DATE_TOOL_NAME: &str = "getDateTool";
pub const DATE_TOOL_DESCRIPTION: &str = "get information about the current date and time";
pub const DATE_TOOL_SCHEMA: &str = r#"{"type":"object","properties":{},"required":[]}"#;

pub const TURBINE_SOLAR_TOOL_NAME: &str = "getTurbineSolarInfo";
pub const TURBINE_SOLAR_TOOL_DESCRIPTION: &str = "This tool can answer questions about Wind Turbine fleet, performance metrics, maintenance, troubleshooting, best practices, foundation issues based on the image available. It can also answer about cost savings based on the monthly electricity bill amount due, solar potential insighs for a given address, cleaning tips, troubleshooting, maintenance, and general information about Solar panel. DO NOT expect user to provide the monthly electricity cost or foundation image of a wind turbine or any sort of confirmation as this is tool is capable of fetching the necessary wind turbine foundation images or electricity bill amount due.";
pub const TURBINE_SOLAR_TOOL_SCHEMA: &str = r#"{"type":"object","properties":{"query":{"type":"string","description":"the query to be answered by the Turbine Solar Agent"}},"required":["query"]}"#;

pub static DEFAULT_TOOL_CONFIGURATION: LazyLock<ToolConfiguration> = LazyLock::new(|| {
    ToolConfiguration::from_specs([
        ToolSpec::new(DATE_TOOL_NAME, DATE_TOOL_DESCRIPTION, DATE_TOOL_SCHEMA),
        ToolSpec::new(
            TURBINE_SOLAR_TOOL_NAME,
            TURBINE_SOLAR_TOOL_DESCRIPTION,
            TURBINE_SOLAR_TOOL_SCHEMA,
        ),
    ])
});

/// Seed conversation for bootstrapping and tests.
pub static DEFAULT_CHAT_HISTORY: LazyLock<Vec<ChatMessage>> = LazyLock::new(|| {
    vec![
        ChatMessage::user("hi there i would like to cancel my hotel reservation"),
        ChatMessage::assistant(
            "Hello! I'd be happy to assist you with cancelling your hotel reservation. To get started, could you please provide me with your full name and the check-in date for your reservation?",
        ),
        ChatMessage::user("yeah so my name is don smith"),
        ChatMessage::assistant(
            "Thank you, Don. Now, could you please provide me with the check-in date for your reservation?",
        ),
        ChatMessage::user("yes so um let me check just a second"),
        ChatMessage::assistant("Take your time, Don. I'll be here when you're ready."),
    ]
});

/// Owned set of presets used wherever an event argument is omitted.
///
/// Missing keys fall back to the built-in presets when deserializing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Defaults {
    pub inference_configuration: InferenceConfiguration,
    pub audio_input_configuration: AudioInputConfiguration,
    pub audio_output_configuration: AudioOutputConfiguration,
    pub tool_configuration: ToolConfiguration,
    pub system_prompt: String,
    pub chat_history: Vec<ChatMessage>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            inference_configuration: DEFAULT_INFERENCE_CONFIGURATION,
            audio_input_configuration: DEFAULT_AUDIO_INPUT_CONFIGURATION,
            audio_output_configuration: DEFAULT_AUDIO_OUTPUT_CONFIGURATION.clone(),
            tool_configuration: DEFAULT_TOOL_CONFIGURATION.clone(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            chat_history: DEFAULT_CHAT_HISTORY.clone(),
        }
    }
}

impl Defaults {
    /// Parse presets from JSON and validate them.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a preset is out of range.
    #[allow(clippy::result_large_err)]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let defaults: Self = serde_json::from_str(json)?;
        defaults.validate()?;
        tracing::debug!(
            tools = defaults.tool_configuration.tools.len(),
            voice = %defaults.audio_output_configuration.voice_id,
            "loaded event defaults"
        );
        Ok(defaults)
    }

    #[must_use]
    pub const fn with_inference(mut self, config: InferenceConfiguration) -> Self {
        self.inference_configuration = config;
        self
    }

    #[must_use]
    pub const fn with_audio_input(mut self, config: AudioInputConfiguration) -> Self {
        self.audio_input_configuration = config;
        self
    }

    #[must_use]
    pub fn with_audio_output(mut self, config: AudioOutputConfiguration) -> Self {
        self.audio_output_configuration = config;
        self
    }

    #[must_use]
    pub fn with_tools(mut self, config: ToolConfiguration) -> Self {
        self.tool_configuration = config;
        self
    }

    #[must_use]
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn with_chat_history(mut self, history: Vec<ChatMessage>) -> Self {
        self.chat_history = history;
        self
    }

    /// # Errors
    /// Returns an error if any preset is invalid.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> crate::Result<()> {
        self.inference_configuration.validate()?;
        self.audio_input_configuration.validate()?;
        self.audio_output_configuration.validate()?;
        self.tool_configuration.validate()
    }
}
