use serde::{Deserialize, Serialize};

/// Generation controls carried by `sessionStart`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfiguration {
    pub max_tokens: u32,
    pub top_p: f64,
    pub temperature: f64,
}

impl InferenceConfiguration {
    /// Build a configuration, checking each value's range.
    ///
    /// # Errors
    /// Returns an error if `max_tokens` is zero, `top_p` is outside `(0, 1]`,
    /// or `temperature` is negative or not finite.
    #[allow(clippy::result_large_err)]
    pub fn new(max_tokens: u32, top_p: f64, temperature: f64) -> crate::Result<Self> {
        let config = Self {
            max_tokens,
            top_p,
            temperature,
        };
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub const fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    #[must_use]
    pub const fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// # Errors
    /// Returns an error if any value is out of range.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_tokens == 0 {
            return Err(crate::Error::InvalidArgument(
                "maxTokens must be greater than 0".to_string(),
            ));
        }
        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            return Err(crate::Error::InvalidArgument(format!(
                "topP must be in (0, 1], got {}",
                self.top_p
            )));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(crate::Error::InvalidArgument(format!(
                "temperature must be >= 0, got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}

impl Default for InferenceConfiguration {
    fn default() -> Self {
        super::defaults::DEFAULT_INFERENCE_CONFIGURATION
    }
}
