//! services/api/src/web/tts.rs
//!
//! The speech proxy: the browser never sees the provider's API key, it calls
//! these endpoints and the server forwards to the speech adapter.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use edubloom_core::ports::PortError;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

use crate::web::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// Overrides the configured default voice.
    #[serde(default)]
    pub voice_id: Option<String>,
}

fn json_error(status: StatusCode, body: serde_json::Value) -> Response {
    (status, Json(body)).into_response()
}

fn internal_error() -> Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "Internal server error" }),
    )
}

fn upstream_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}

/// Synthesize speech from text.
#[utoipa::path(
    post,
    path = "/api/elevenlabs/synthesize",
    request_body = SynthesizeRequest,
    responses(
        (status = 200, description = "MP3 audio", content_type = "audio/mpeg"),
        (status = 400, description = "Text is required"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn synthesize_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SynthesizeRequest>,
) -> Response {
    // Blank text is rejected, but what reaches the provider is the text as sent.
    let text = match req.text.as_deref() {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            return json_error(
                StatusCode::BAD_REQUEST,
                json!({ "error": "Text is required" }),
            )
        }
    };

    match state
        .tts_adapter
        .synthesize(text, req.voice_id.as_deref())
        .await
    {
        Ok(audio) => ([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response(),
        Err(PortError::Upstream { status, details }) => json_error(
            upstream_status(status),
            json!({ "error": "Failed to synthesize speech", "details": details }),
        ),
        Err(e) => {
            error!("Speech synthesis failed: {:?}", e);
            internal_error()
        }
    }
}

/// List the voices available for synthesis.
#[utoipa::path(
    get,
    path = "/api/elevenlabs/voices",
    responses(
        (status = 200, description = "The provider's voice catalogue"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn voices_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.tts_adapter.list_voices().await {
        Ok(voices) => Json(voices).into_response(),
        Err(PortError::Upstream { status, details }) => {
            error!(status, %details, "Voice listing rejected upstream");
            json_error(
                upstream_status(status),
                json!({ "error": "Failed to fetch voices" }),
            )
        }
        Err(e) => {
            error!("Error fetching voices: {:?}", e);
            internal_error()
        }
    }
}
