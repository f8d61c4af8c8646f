//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use edubloom_core::distance::DistanceMode;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

pub const DEFAULT_ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io/v1";
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
pub const DEFAULT_MODEL_ID: &str = "eleven_monolingual_v1";

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_base_url: String,
    pub default_voice_id: String,
    pub tts_model_id: String,
    pub distance_mode: DistanceMode,
    pub static_dir: PathBuf,
    pub cors_origin: String,
}

impl Default for Config {
    /// Every setting at its default, with no API key.
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3001)),
            log_level: Level::INFO,
            elevenlabs_api_key: None,
            elevenlabs_base_url: DEFAULT_ELEVENLABS_BASE_URL.to_string(),
            default_voice_id: DEFAULT_VOICE_ID.to_string(),
            tts_model_id: DEFAULT_MODEL_ID.to_string(),
            distance_mode: DistanceMode::default(),
            static_dir: PathBuf::from("./dist"),
            cors_origin: "http://localhost:5173".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        let defaults = Self::default();

        // --- Server Settings ---
        let bind_address = match std::env::var("BIND_ADDRESS") {
            Ok(raw) => raw
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?,
            Err(_) => defaults.bind_address,
        };

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let cors_origin = std::env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin);

        // --- Speech Provider (the key is checked by the server binary) ---
        let elevenlabs_api_key = std::env::var("ELEVENLABS_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let elevenlabs_base_url =
            std::env::var("ELEVENLABS_BASE_URL").unwrap_or(defaults.elevenlabs_base_url);
        let default_voice_id =
            std::env::var("ELEVENLABS_VOICE_ID").unwrap_or(defaults.default_voice_id);
        let tts_model_id = std::env::var("ELEVENLABS_MODEL_ID").unwrap_or(defaults.tts_model_id);

        // --- Matching ---
        let distance_mode = match std::env::var("DISTANCE_MODE") {
            Ok(raw) => raw.parse::<DistanceMode>().map_err(|e| {
                ConfigError::InvalidValue("DISTANCE_MODE".to_string(), e.to_string())
            })?,
            Err(_) => defaults.distance_mode,
        };

        Ok(Self {
            bind_address,
            log_level,
            elevenlabs_api_key,
            elevenlabs_base_url,
            default_voice_id,
            tts_model_id,
            distance_mode,
            static_dir,
            cors_origin,
        })
    }

    /// The speech API key, or [`ConfigError::MissingVar`] when it is not set.
    pub fn require_elevenlabs_api_key(&self) -> Result<&str, ConfigError> {
        self.elevenlabs_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingVar("ELEVENLABS_API_KEY".to_string()))
    }
}
