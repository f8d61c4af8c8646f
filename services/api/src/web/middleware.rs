//! services/api/src/web/middleware.rs
//!
//! Authentication middleware for protecting routes.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use edubloom_core::auth::AuthUser;
use edubloom_core::domain::Role;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::web::state::AppState;

pub const SESSION_COOKIE: &str = "session";

/// Reads the session id out of the `Cookie` header.
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())?
        .split(';')
        .find_map(|c| c.trim().strip_prefix("session="))
        .and_then(|raw| Uuid::parse_str(raw).ok())
}

/// Middleware that validates the session cookie and resolves the signed-in user.
///
/// If valid, inserts the [`AuthUser`] into request extensions for handlers to use.
/// If invalid or missing, returns 401 Unauthorized.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let session_id = session_id(req.headers()).ok_or(StatusCode::UNAUTHORIZED)?;

    let user = state
        .sessions
        .user(session_id)
        .await
        .ok_or(StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Middleware for admin-only routes. Must run after [`require_auth`].
pub async fn require_admin(req: Request, next: Next) -> Result<Response, StatusCode> {
    let user = req
        .extensions()
        .get::<AuthUser>()
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if user.role != Role::Admin {
        warn!(email = %user.email, "Non-admin attempted an admin route");
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(next.run(req).await)
}
