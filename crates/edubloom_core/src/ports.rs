//! crates/edubloom_core/src/ports.rs
//!
//! Defines the service contracts (traits) that external systems plug into.
//! The store itself is in-process and synchronous; only the speech service
//! crosses a network boundary.

use async_trait::async_trait;
use bytes::Bytes;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The remote service answered with a non-success status.
    #[error("Upstream service returned {status}: {details}")]
    Upstream { status: u16, details: String },
    #[error("Unauthorized")]
    Unauthorized,
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait TextToSpeechService: Send + Sync {
    /// Synthesizes `text` into MP3 audio. `voice_id` overrides the default voice.
    async fn synthesize(&self, text: &str, voice_id: Option<&str>) -> PortResult<Bytes>;

    /// The voice catalogue, passed through as the provider returns it.
    async fn list_voices(&self) -> PortResult<serde_json::Value>;
}
