//! Integration tests for the speech proxy endpoints.

mod common;

use axum::http::{header, StatusCode};
use common::{body_bytes, body_json, get, post_json, FakeTts, FAKE_AUDIO};
use serde_json::json;

#[tokio::test]
async fn synthesize_returns_mpeg_audio() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/elevenlabs/synthesize",
        json!({ "text": "Hello", "voiceId": "custom" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");
    let audio = body_bytes(response).await;
    assert!(audio.starts_with(FAKE_AUDIO));
    assert!(audio.ends_with(b"customHello"));
}

#[tokio::test]
async fn surrounding_whitespace_is_forwarded_untouched() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/elevenlabs/synthesize",
        json!({ "text": "  Hello there.\n" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let audio = body_bytes(response).await;
    assert!(audio.ends_with(b"default  Hello there.\n"));
}

#[tokio::test]
async fn missing_or_blank_text_is_a_bad_request() {
    let app = common::build_test_app();

    for body in [json!({}), json!({ "text": "" }), json!({ "text": "   " })] {
        let response = post_json(app.clone(), "/api/elevenlabs/synthesize", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Text is required" }));
    }
}

#[tokio::test]
async fn upstream_rejection_keeps_its_status() {
    let app = common::build_test_app_with(FakeTts::Rejected(429));
    let response = post_json(app, "/api/elevenlabs/synthesize", json!({ "text": "Hi" })).await;

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to synthesize speech");
    assert_eq!(json["details"], "quota exceeded");
}

#[tokio::test]
async fn transport_failure_is_an_internal_error() {
    let app = common::build_test_app_with(FakeTts::Unreachable);
    let response = post_json(app, "/api/elevenlabs/synthesize", json!({ "text": "Hi" })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn voices_pass_through() {
    let app = common::build_test_app();
    let response = get(app, "/api/elevenlabs/voices").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["voices"][0]["name"], "Rachel");
}

#[tokio::test]
async fn voices_upstream_failure() {
    let app = common::build_test_app_with(FakeTts::Rejected(401));
    let response = get(app, "/api/elevenlabs/voices").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "error": "Failed to fetch voices" }));
}
