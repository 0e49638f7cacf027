pub mod error;

pub use error::{ElevenLabsError, Result};

use std::time::Duration;

use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
const MODEL_ID: &str = "eleven_multilingual_v2";
const OUTPUT_FORMAT: &str = "mp3_44100_128";

/// Client for the ElevenLabs text-to-speech endpoint.
pub struct ElevenLabsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ElevenLabsClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Synthesize speech for `text` with the given voice. Returns raw MP3 bytes.
    pub async fn synthesize(&self, voice_id: &str, text: &str) -> Result<Vec<u8>> {
        debug!(voice_id, chars = text.len(), "Text-to-speech request");
        let endpoint = format!("{}/v1/text-to-speech/{voice_id}", self.base_url);

        let body = serde_json::json!({
            "text": text,
            "model_id": MODEL_ID,
        });

        let resp = self
            .client
            .post(&endpoint)
            .header("xi-api-key", &self.api_key)
            .query(&[("output_format", OUTPUT_FORMAT)])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ElevenLabsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let audio = resp.bytes().await?.to_vec();
        debug!(bytes = audio.len(), "Received synthesized audio");
        Ok(audio)
    }
}
