use serde::{Deserialize, Serialize};

use super::MediaType;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioType {
    #[default]
    Speech,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AudioEncoding {
    #[default]
    Base64,
}

/// Format of the audio the client streams in an `AUDIO` content unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AudioInputConfiguration {
    pub media_type: MediaType,
    pub sample_rate_hertz: u32,
    pub sample_size_bits: u16,
    pub channel_count: u16,
    pub audio_type: AudioType,
    pub encoding: AudioEncoding,
}

impl AudioInputConfiguration {
    /// 16-bit linear PCM at the given rate and channel count.
    #[must_use]
    pub const fn lpcm(sample_rate_hertz: u32, channel_count: u16) -> Self {
        Self {
            media_type: MediaType::AudioLpcm,
            sample_rate_hertz,
            sample_size_bits: 16,
            channel_count,
            audio_type: AudioType::Speech,
            encoding: AudioEncoding::Base64,
        }
    }

    /// # Errors
    /// Returns an error if the format is not audio or any dimension is zero.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> crate::Result<()> {
        validate_format(
            "audioInputConfiguration",
            self.media_type,
            self.sample_rate_hertz,
            self.sample_size_bits,
            self.channel_count,
        )
    }
}

impl Default for AudioInputConfiguration {
    fn default() -> Self {
        super::defaults::DEFAULT_AUDIO_INPUT_CONFIGURATION
    }
}

/// Format and voice the backend uses for the audio it speaks back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AudioOutputConfiguration {
    pub media_type: MediaType,
    pub sample_rate_hertz: u32,
    pub sample_size_bits: u16,
    pub channel_count: u16,
    pub voice_id: String,
    pub encoding: AudioEncoding,
    pub audio_type: AudioType,
}

impl AudioOutputConfiguration {
    #[must_use]
    pub fn with_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    #[must_use]
    pub const fn with_sample_rate(mut self, sample_rate_hertz: u32) -> Self {
        self.sample_rate_hertz = sample_rate_hertz;
        self
    }

    /// # Errors
    /// Returns an error if the format is not audio, any dimension is zero, or
    /// the voice id is empty.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> crate::Result<()> {
        validate_format(
            "audioOutputConfiguration",
            self.media_type,
            self.sample_rate_hertz,
            self.sample_size_bits,
            self.channel_count,
        )?;
        super::validate_identifier("audioOutputConfiguration.voiceId", &self.voice_id)
    }
}

impl Default for AudioOutputConfiguration {
    fn default() -> Self {
        super::defaults::DEFAULT_AUDIO_OUTPUT_CONFIGURATION.clone()
    }
}

#[allow(clippy::result_large_err)]
fn validate_format(
    field: &str,
    media_type: MediaType,
    sample_rate_hertz: u32,
    sample_size_bits: u16,
    channel_count: u16,
) -> crate::Result<()> {
    if media_type != MediaType::AudioLpcm {
        return Err(crate::Error::InvalidArgument(format!(
            "{field}.mediaType must be audio/lpcm, got {media_type}"
        )));
    }
    if sample_rate_hertz == 0 || sample_size_bits == 0 || channel_count == 0 {
        return Err(crate::Error::InvalidArgument(format!(
            "{field} needs a non-zero sample rate, sample size and channel count"
        )));
    }
    Ok(())
}
