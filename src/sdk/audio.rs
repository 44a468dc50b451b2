use base64::Engine as _;
use base64::engine::general_purpose;

use crate::protocol::client_events::ClientEvent;

/// 512 PCM16 samples, the frame size a 16 kHz microphone client posts.
pub const DEFAULT_CHUNK_BYTES: usize = 1024;

/// Splits raw PCM into base64 `audioInput` events of bounded size.
///
/// This only slices and encodes; it never resamples or transcodes.
#[derive(Debug, Clone, Copy)]
pub struct AudioChunker {
    max_chunk_bytes: usize,
}

impl Default for AudioChunker {
    fn default() -> Self {
        Self {
            max_chunk_bytes: DEFAULT_CHUNK_BYTES,
        }
    }
}

impl AudioChunker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chunk size is rounded down to a whole PCM16 sample and never below one.
    #[must_use]
    pub const fn with_chunk_bytes(max_chunk_bytes: usize) -> Self {
        let even = max_chunk_bytes & !1;
        Self {
            max_chunk_bytes: if even < 2 { 2 } else { even },
        }
    }

    #[must_use]
    pub const fn chunk_bytes(&self) -> usize {
        self.max_chunk_bytes
    }

    #[must_use]
    pub fn events_from_bytes(
        &self,
        prompt_name: &str,
        content_name: &str,
        pcm_bytes: &[u8],
    ) -> Vec<ClientEvent> {
        let events: Vec<ClientEvent> = pcm_bytes
            .chunks(self.max_chunk_bytes)
            .map(|chunk| {
                ClientEvent::audio_input(
                    prompt_name,
                    content_name,
                    general_purpose::STANDARD.encode(chunk),
                )
            })
            .collect();
        tracing::trace!(
            prompt = prompt_name,
            content = content_name,
            bytes = pcm_bytes.len(),
            chunks = events.len(),
            "encoded audio chunks"
        );
        events
    }

    /// Little-endian PCM16 samples.
    #[must_use]
    pub fn events_from_pcm16(
        &self,
        prompt_name: &str,
        content_name: &str,
        samples: &[i16],
    ) -> Vec<ClientEvent> {
        if samples.is_empty() {
            return Vec::new();
        }
        let mut buf = Vec::with_capacity(samples.len() * 2);
        for sample in samples {
            buf.extend_from_slice(&sample.to_le_bytes());
        }
        self.events_from_bytes(prompt_name, content_name, &buf)
    }
}
