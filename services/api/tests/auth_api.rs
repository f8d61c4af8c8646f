//! Integration tests for sign-in, the member routes and the admin routes.

mod common;

use api_lib::web::api_router;
use api_lib::web::state::{session_ttl, SESSION_TTL_DAYS};
use axum::http::{header, Method, StatusCode};
use chrono::{Duration, Utc};
use common::{body_json, login, post_json, send};
use edubloom_core::auth::{AuthSession, MemoryKeyValueStore};
use serde_json::json;

const STUDENT: &str = "student@example.com";

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_sets_a_session_cookie_and_session_reports_it() {
    let app = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/auth/login",
        json!({ "email": STUDENT, "password": "x" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(cookie.starts_with("session="));
    let view = body_json(response).await;
    assert_eq!(view["isAuthenticated"], true);
    assert_eq!(view["user"]["role"], "student");
    assert_eq!(view["user"]["name"], "student");

    let max_age = format!("Max-Age={}", SESSION_TTL_DAYS * 24 * 60 * 60);
    assert!(cookie.contains(&max_age));

    let pair = cookie.split(';').next().unwrap();
    let session = body_json(send(app, Method::GET, "/auth/session", Some(pair), None).await).await;
    assert_eq!(session["user"]["email"], STUDENT);
}

#[tokio::test]
async fn signup_creates_a_student() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/auth/signup",
        json!({ "name": "Ann Lee", "email": "ann@example.com", "password": "pw" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let view = body_json(response).await;
    assert_eq!(view["user"]["name"], "Ann Lee");
    assert_eq!(view["user"]["role"], "student");
}

#[tokio::test]
async fn blank_email_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(app, "/auth/login", json!({ "email": "", "password": "x" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = common::build_test_app();
    let cookie = login(app.clone(), STUDENT, "x").await;

    let response = send(app.clone(), Method::POST, "/auth/logout", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(app.clone(), Method::GET, "/api/cart", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let session = body_json(send(app, Method::GET, "/auth/session", Some(&cookie), None).await).await;
    assert_eq!(session["isAuthenticated"], false);
}

#[tokio::test]
async fn expired_session_is_unauthorized() {
    let state = common::build_test_state();
    let mut session = AuthSession::restore(MemoryKeyValueStore::default());
    assert!(session.login(STUDENT, "x", None));
    let issued_at = Utc::now() - session_ttl() - Duration::minutes(5);
    let id = state.sessions.insert_issued_at(session, issued_at).await;
    let cookie = format!("session={id}");

    let app = api_router(state.clone());
    let response = send(app.clone(), Method::GET, "/api/cart", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let view = body_json(send(app, Method::GET, "/auth/session", Some(&cookie), None).await).await;
    assert_eq!(view["isAuthenticated"], false);
    assert!(state.sessions.is_empty().await);
}

// ---------------------------------------------------------------------------
// Member routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn member_routes_require_a_session() {
    let app = common::build_test_app();
    for uri in ["/api/matching/nearby", "/api/cart"] {
        let response = send(app.clone(), Method::GET, uri, None, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn students_see_nearby_tutors_within_the_threshold() {
    let app = common::build_test_app();
    let cookie = login(app.clone(), STUDENT, "x").await;

    // Unknown students are placed in New York, where only the first tutor teaches.
    let response = send(app.clone(), Method::GET, "/api/matching/nearby", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let nearby = json.as_array().unwrap();
    assert_eq!(nearby.len(), 1);
    assert_eq!(nearby[0]["name"], "Dr. Sarah Johnson");
    assert_eq!(nearby[0]["distance"], 0.0);

    let response = send(
        app,
        Method::GET,
        "/api/matching/nearby?maxDistance=5000",
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn cart_and_enrollment_flow() {
    let app = common::build_test_app();
    let cookie = login(app.clone(), STUDENT, "x").await;

    let response = send(
        app.clone(),
        Method::POST,
        "/api/cart",
        Some(&cookie),
        Some(json!({ "courseId": "3" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let item_id = body_json(response).await["id"].as_str().unwrap().to_string();

    let cart = body_json(send(app.clone(), Method::GET, "/api/cart", Some(&cookie), None).await).await;
    assert_eq!(cart.as_array().unwrap().len(), 1);
    assert_eq!(cart[0]["courseId"], "3");

    // Another user cannot remove it.
    let other = login(app.clone(), "other@example.com", "x").await;
    let uri = format!("/api/cart/{item_id}");
    let response = send(app.clone(), Method::DELETE, &uri, Some(&other), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(app.clone(), Method::DELETE, &uri, Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(
        app.clone(),
        Method::POST,
        "/api/enrollments",
        Some(&cookie),
        Some(json!({ "courseId": "3" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let enrollment = body_json(response).await;
    assert_eq!(enrollment["status"], "active");
    assert_eq!(enrollment["progress"], 0);

    let response = send(
        app,
        Method::POST,
        "/api/enrollments",
        Some(&cookie),
        Some(json!({ "courseId": "999" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Admin routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_routes_forbid_students() {
    let app = common::build_test_app();
    let cookie = login(app.clone(), STUDENT, "x").await;

    let response = send(app, Method::GET, "/api/admin/analytics", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_paths_under_guarded_prefixes_are_not_found() {
    let app = common::build_test_app();
    for uri in ["/api/admin/nope", "/api/cart/items/extra", "/api/nope"] {
        let response = send(app.clone(), Method::GET, uri, None, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn admin_sees_analytics_and_users() {
    let app = common::build_test_app();
    let cookie = login(app.clone(), "admin@wetute.com", "admin123").await;

    let analytics = body_json(
        send(app.clone(), Method::GET, "/api/admin/analytics", Some(&cookie), None).await,
    )
    .await;
    assert_eq!(analytics["totalCourses"], 12);
    assert_eq!(analytics["activeTutors"], 6);
    assert_eq!(analytics["topCategories"][0]["name"], "Web Development");
    assert_eq!(analytics["topCategories"][0]["count"], 4);

    let tutors = body_json(
        send(app, Method::GET, "/api/admin/users?role=tutor", Some(&cookie), None).await,
    )
    .await;
    assert_eq!(tutors.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn admin_manages_courses() {
    let app = common::build_test_app();
    let cookie = login(app.clone(), "admin@wetute.com", "admin123").await;

    let listed = body_json(
        send(
            app.clone(),
            Method::GET,
            "/api/admin/courses?categoryId=1&level=all",
            Some(&cookie),
            None,
        )
        .await,
    )
    .await;
    let ids: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["1", "2", "3", "8"]);

    let draft = json!({
        "title": "Intro to Rust",
        "description": "Systems programming without fear.",
        "instructorId": "2",
        "categoryId": "1",
        "level": "Beginner",
        "duration": 12,
        "price": 49.0,
        "originalPrice": 99.0,
        "image": "https://example.com/rust.png",
        "format": "Online",
        "maxStudents": 20,
        "status": "active"
    });
    let response = send(app.clone(), Method::POST, "/api/admin/courses", Some(&cookie), Some(draft)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let uri = format!("/api/admin/courses/{}", created["id"].as_str().unwrap());

    let response = send(
        app.clone(),
        Method::PUT,
        &uri,
        Some(&cookie),
        Some(json!({ "price": 39.0 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["price"], 39.0);
    assert_eq!(updated["title"], "Intro to Rust");

    let response = send(app.clone(), Method::DELETE, &uri, Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = send(app, Method::DELETE, &uri, Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
