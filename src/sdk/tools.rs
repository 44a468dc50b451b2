use crate::Result;
use crate::protocol::client_events::ClientEvent;
use crate::protocol::models::{DEFAULT_TOOL_CONFIGURATION, ToolConfiguration, ToolSpec};
use schemars::JsonSchema;
use serde::Serialize;

/// Ordered tool catalog offered at `promptStart`.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    specs: Vec<ToolSpec>,
}

impl ToolRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-filled with the built-in date and turbine/solar tools.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            specs: DEFAULT_TOOL_CONFIGURATION.specs().cloned().collect(),
        }
    }

    #[must_use]
    pub fn definitions(&self) -> &[ToolSpec] {
        &self.specs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Register a tool whose input schema is already a JSON string.
    ///
    /// # Errors
    /// Returns an error if the name is taken or the schema is not a JSON object.
    #[allow(clippy::result_large_err)]
    pub fn register(&mut self, spec: ToolSpec) -> Result<()> {
        spec.validate()?;
        if self.specs.iter().any(|existing| existing.name == spec.name) {
            return Err(crate::Error::InvalidArgument(format!(
                "duplicate tool name: {}",
                spec.name
            )));
        }
        tracing::debug!(tool = %spec.name, "registered tool");
        self.specs.push(spec);
        Ok(())
    }

    /// Register a tool whose input schema is derived from `TArgs`.
    ///
    /// # Errors
    /// Returns an error if the name is taken or the schema cannot be encoded.
    #[allow(clippy::result_large_err)]
    pub fn tool<TArgs>(&mut self, name: &str, description: impl Into<String>) -> Result<()>
    where
        TArgs: JsonSchema,
    {
        let schema = schemars::schema_for!(TArgs);
        let json = serde_json::to_string(&schema)?;
        self.register(ToolSpec::new(name, description, json))
    }

    #[must_use]
    pub fn to_configuration(&self) -> ToolConfiguration {
        ToolConfiguration::from_specs(self.specs.iter().cloned())
    }
}

impl From<ToolRegistry> for ToolConfiguration {
    fn from(registry: ToolRegistry) -> Self {
        Self::from_specs(registry.specs)
    }
}

/// Output of a tool the backend asked for, addressed by its `toolUseId`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolResult {
    pub tool_use_id: String,
    pub content: String,
}

impl ToolResult {
    #[must_use]
    pub fn text(tool_use_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_use_id: tool_use_id.into(),
            content: content.into(),
        }
    }

    /// Encode a structured result as the JSON text the backend expects.
    ///
    /// # Errors
    /// Returns an error if `output` cannot be serialized.
    #[allow(clippy::result_large_err)]
    pub fn json<T: Serialize>(tool_use_id: impl Into<String>, output: &T) -> Result<Self> {
        Ok(Self::text(tool_use_id, serde_json::to_string(output)?))
    }

    /// The three events that deliver this result: open a `TOOL` content unit,
    /// send the text with role `TOOL`, close the unit.
    #[must_use]
    pub fn events(&self, prompt_name: &str, content_name: &str) -> [ClientEvent; 3] {
        [
            ClientEvent::content_start_tool(prompt_name, content_name, self.tool_use_id.as_str()),
            ClientEvent::text_input_tool(prompt_name, content_name, self.content.as_str()),
            ClientEvent::content_end(prompt_name, content_name),
        ]
    }
}
