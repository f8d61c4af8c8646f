//! services/api/src/web/auth.rs
//!
//! Authentication endpoints for the mock sign-in flow: signup, login, logout
//! and the current session.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use edubloom_core::auth::{AuthSession, AuthView, MemoryKeyValueStore};
use edubloom_core::filter::UserFilter;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::web::middleware::{session_id, SESSION_COOKIE};
use crate::web::state::{session_ttl, AppState};

//=========================================================================================
// Request Types
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

//=========================================================================================
// Helpers
//=========================================================================================

fn session_cookie(id: Uuid) -> String {
    format!(
        "{}={}; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age={}",
        SESSION_COOKIE,
        id,
        session_ttl().num_seconds()
    )
}

fn signed_out() -> AuthView {
    AuthView {
        user: None,
        is_authenticated: false,
        loading: false,
    }
}

fn fresh_session() -> AuthSession<MemoryKeyValueStore> {
    AuthSession::restore(MemoryKeyValueStore::default())
}

//=========================================================================================
// Handlers
//=========================================================================================

/// POST /auth/signup - Register a new student and sign them in
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Signed up; body is the auth view, a session cookie is set"),
        (status = 400, description = "Email is required")
    )
)]
pub async fn signup_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut session = fresh_session();
    if !session.signup(&req.name, &req.email, &req.password) {
        return Err((StatusCode::BAD_REQUEST, "Email is required".to_string()));
    }

    let view = session.view();
    let id = state.sessions.insert(session).await;

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, session_cookie(id))],
        Json(view),
    ))
}

/// POST /auth/login - Sign in with any email
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in; body is the auth view, a session cookie is set"),
        (status = 400, description = "Email is required")
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let known = state
        .store
        .read()
        .await
        .get_users(&UserFilter::new().email(req.email.as_str()))
        .into_iter()
        .next();

    let mut session = fresh_session();
    if !session.login(&req.email, &req.password, known.as_ref()) {
        return Err((StatusCode::BAD_REQUEST, "Email is required".to_string()));
    }

    let view = session.view();
    let id = state.sessions.insert(session).await;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, session_cookie(id))],
        Json(view),
    ))
}

/// POST /auth/logout - Sign out and forget the session
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logout successful"),
        (status = 401, description = "No active session")
    )
)]
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let id = session_id(&headers)
        .ok_or((StatusCode::UNAUTHORIZED, "No session found".to_string()))?;

    if state.sessions.remove(id).await {
        info!(session = %id, "signed out");
    } else {
        warn!(session = %id, "Logout for an unknown session");
    }

    let cookie = format!("{}=; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age=0", SESSION_COOKIE);
    Ok((StatusCode::OK, [(header::SET_COOKIE, cookie)]))
}

/// GET /auth/session - The current auth view, signed out when there is no session
#[utoipa::path(
    get,
    path = "/auth/session",
    responses(
        (status = 200, description = "The auth view: user, isAuthenticated, loading")
    )
)]
pub async fn session_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let view = match session_id(&headers) {
        Some(id) => state.sessions.view(id).await.unwrap_or_else(signed_out),
        None => signed_out(),
    };
    Json(view)
}
