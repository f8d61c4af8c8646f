#![allow(dead_code)]

use std::sync::Arc;

use api_lib::config::Config;
use api_lib::web::{api_router, AppState};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use bytes::Bytes;
use edubloom_core::ports::{PortError, PortResult, TextToSpeechService};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const FAKE_AUDIO: &[u8] = b"ID3fake-mp3-frames";

/// How the fake speech service answers.
#[derive(Clone, Copy)]
pub enum FakeTts {
    Working,
    Rejected(u16),
    Unreachable,
}

#[async_trait]
impl TextToSpeechService for FakeTts {
    async fn synthesize(&self, text: &str, voice_id: Option<&str>) -> PortResult<Bytes> {
        match self {
            FakeTts::Working => {
                let mut audio = FAKE_AUDIO.to_vec();
                audio.extend_from_slice(voice_id.unwrap_or("default").as_bytes());
                audio.extend_from_slice(text.as_bytes());
                Ok(Bytes::from(audio))
            }
            FakeTts::Rejected(status) => Err(PortError::Upstream {
                status: *status,
                details: "quota exceeded".to_string(),
            }),
            FakeTts::Unreachable => Err(PortError::Unexpected("connection refused".to_string())),
        }
    }

    async fn list_voices(&self) -> PortResult<serde_json::Value> {
        match self {
            FakeTts::Working => Ok(serde_json::json!({
                "voices": [{ "voice_id": "21m00Tcm4TlvDq8ikWAM", "name": "Rachel" }]
            })),
            FakeTts::Rejected(status) => Err(PortError::Upstream {
                status: *status,
                details: "nope".to_string(),
            }),
            FakeTts::Unreachable => Err(PortError::Unexpected("connection refused".to_string())),
        }
    }
}

/// Shared state over a freshly seeded store, for tests that reach past the router.
pub fn build_test_state_with(tts: FakeTts) -> Arc<AppState> {
    Arc::new(AppState::new(Arc::new(Config::default()), Arc::new(tts)))
}

pub fn build_test_state() -> Arc<AppState> {
    build_test_state_with(FakeTts::Working)
}

/// Build the API router over a freshly seeded store and the given fake speech service.
pub fn build_test_app_with(tts: FakeTts) -> Router {
    api_router(build_test_state_with(tts))
}

pub fn build_test_app() -> Router {
    build_test_app_with(FakeTts::Working)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Log in and return the `session=<id>` pair to send back as a cookie.
pub async fn login(app: Router, email: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/auth/login",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .unwrap()
        .to_string()
}
