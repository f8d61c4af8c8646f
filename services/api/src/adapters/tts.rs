//! services/api/src/adapters/tts.rs
//!
//! This module contains the adapter for the ElevenLabs Text-to-Speech service.
//! It implements the `TextToSpeechService` port from the `core` crate.

use async_trait::async_trait;
use bytes::Bytes;
use edubloom_core::ports::{PortError, PortResult, TextToSpeechService};
use serde::Serialize;
use tracing::error;

use crate::config::Config;

const API_KEY_HEADER: &str = "xi-api-key";
const VOICE_STABILITY: f32 = 0.5;
const VOICE_SIMILARITY_BOOST: f32 = 0.5;

//=========================================================================================
// Request Bodies
//=========================================================================================

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements the `TextToSpeechService` port using the ElevenLabs API.
#[derive(Clone)]
pub struct ElevenLabsTtsAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model_id: String,
    default_voice_id: String,
}

impl ElevenLabsTtsAdapter {
    /// Creates a new `ElevenLabsTtsAdapter`.
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model_id: impl Into<String>,
        default_voice_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model_id: model_id.into(),
            default_voice_id: default_voice_id.into(),
        }
    }

    /// Builds the adapter from the loaded configuration and a known API key.
    pub fn from_config(client: reqwest::Client, config: &Config, api_key: &str) -> Self {
        Self::new(
            client,
            config.elevenlabs_base_url.as_str(),
            api_key,
            config.tts_model_id.as_str(),
            config.default_voice_id.as_str(),
        )
    }

    fn transport_error(e: reqwest::Error) -> PortError {
        PortError::Unexpected(e.to_string())
    }
}

//=========================================================================================
// `TextToSpeechService` Trait Implementation
//=========================================================================================

#[async_trait]
impl TextToSpeechService for ElevenLabsTtsAdapter {
    /// Requests MP3 audio for `text` from the text-to-speech endpoint.
    async fn synthesize(&self, text: &str, voice_id: Option<&str>) -> PortResult<Bytes> {
        let voice_id = voice_id.unwrap_or(self.default_voice_id.as_str());
        let body = SynthesizeRequest {
            text,
            model_id: &self.model_id,
            voice_settings: VoiceSettings {
                stability: VOICE_STABILITY,
                similarity_boost: VOICE_SIMILARITY_BOOST,
            },
        };

        let response = self
            .client
            .post(format!("{}/text-to-speech/{}", self.base_url, voice_id))
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %details, "Speech synthesis rejected upstream");
            return Err(PortError::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        response.bytes().await.map_err(Self::transport_error)
    }

    /// Fetches the provider's voice catalogue as raw JSON.
    async fn list_voices(&self) -> PortResult<serde_json::Value> {
        let response = self
            .client
            .get(format!("{}/voices", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            return Err(PortError::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        response.json().await.map_err(Self::transport_error)
    }
}
