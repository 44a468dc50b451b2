use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Tool catalog fixed for the lifetime of a prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ToolConfiguration {
    pub tools: Vec<Tool>,
}

impl ToolConfiguration {
    #[must_use]
    pub const fn new(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    #[must_use]
    pub fn from_specs(specs: impl IntoIterator<Item = ToolSpec>) -> Self {
        Self {
            tools: specs.into_iter().map(Tool::from).collect(),
        }
    }

    pub fn specs(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.iter().map(|tool| &tool.tool_spec)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ToolSpec> {
        self.specs().find(|spec| spec.name == name)
    }

    /// # Errors
    /// Returns an error if a tool name repeats or any spec is invalid.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> crate::Result<()> {
        let mut seen = HashSet::with_capacity(self.tools.len());
        for spec in self.specs() {
            spec.validate()?;
            if !seen.insert(spec.name.as_str()) {
                return Err(crate::Error::InvalidArgument(format!(
                    "duplicate tool name: {}",
                    spec.name
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub tool_spec: ToolSpec,
}

impl From<ToolSpec> for Tool {
    fn from(tool_spec: ToolSpec) -> Self {
        Self { tool_spec }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

impl ToolSpec {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schema_json: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: InputSchema {
                json: schema_json.into(),
            },
        }
    }

    /// Parse the schema string back into JSON.
    ///
    /// # Errors
    /// Returns an error if the schema string is not valid JSON.
    #[allow(clippy::result_large_err)]
    pub fn schema(&self) -> crate::Result<Value> {
        Ok(serde_json::from_str(&self.input_schema.json)?)
    }

    /// # Errors
    /// Returns an error if the name is empty or the schema is not a JSON object.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> crate::Result<()> {
        super::validate_identifier("toolSpec.name", &self.name)?;
        match self.schema() {
            Ok(Value::Object(_)) => Ok(()),
            Ok(_) => Err(crate::Error::InvalidArgument(format!(
                "tool {} inputSchema must be a JSON object",
                self.name
            ))),
            Err(e) => Err(crate::Error::InvalidArgument(format!(
                "tool {} inputSchema is not valid JSON: {e}",
                self.name
            ))),
        }
    }
}

/// JSON Schema for the tool's input, carried as an encoded string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputSchema {
    pub json: String,
}
