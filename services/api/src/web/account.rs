//! services/api/src/web/account.rs
//!
//! Handlers for a signed-in user: nearby matching, the cart and enrollment.
//! Every route here sits behind `require_auth`, which supplies the [`AuthUser`].

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use edubloom_core::auth::AuthUser;
use edubloom_core::domain::CartItem;
use edubloom_core::matching::{find_nearby, Viewer};
use edubloom_core::search::{Criteria, NearbyCriteria};
use edubloom_core::store::EntityStore;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use crate::web::state::AppState;

/// Body for adding to the cart or enrolling.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    pub course_id: String,
}

fn ensure_course(store: &EntityStore, course_id: &str) -> Result<(), (StatusCode, String)> {
    store
        .get_course_by_id(course_id)
        .map(|_| ())
        .ok_or((StatusCode::NOT_FOUND, "Course not found".to_string()))
}

//=========================================================================================
// Nearby Matching
//=========================================================================================

/// Tutors near a student, or students near a tutor.
#[utoipa::path(
    get,
    path = "/api/matching/nearby",
    params(
        ("search" = Option<String>, Query, description = "Substring of name or city"),
        ("subject" = Option<String>, Query, description = "Exact subject tag, or `all`"),
        ("maxDistance" = Option<f64>, Query, description = "Miles, inclusive; defaults to 50")
    ),
    responses(
        (status = 200, description = "Nearby candidates in store order"),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn nearby_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(criteria): Query<NearbyCriteria>,
) -> impl IntoResponse {
    let store = state.store.read().await;

    // A stored profile supplies the viewer's city and state.
    let viewer = store
        .get_user_by_id(&user.id)
        .map(|u| Viewer::from_user(&u))
        .unwrap_or_else(|| Viewer::new(user.role));

    let mut estimator = state.config.distance_mode.estimator();
    let candidates = find_nearby(&store, &viewer, estimator.as_mut());
    Json(criteria.apply(&candidates))
}

//=========================================================================================
// Cart
//=========================================================================================

#[utoipa::path(
    get,
    path = "/api/cart",
    responses((status = 200, description = "The signed-in user's cart items"))
)]
pub async fn list_cart_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(store.get_cart(&user.id))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = CourseRef,
    responses(
        (status = 201, description = "The new cart item"),
        (status = 404, description = "Course not found")
    )
)]
pub async fn add_to_cart_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CourseRef>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut store = state.store.write().await;
    ensure_course(&store, &req.course_id)?;

    let item = store.add_to_cart(&user.id, &req.course_id);
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{id}",
    params(("id" = String, Path, description = "Cart item id")),
    responses(
        (status = 204, description = "Removed"),
        (status = 404, description = "No such item in this user's cart")
    )
)]
pub async fn remove_from_cart_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut store = state.store.write().await;
    let owned = store
        .get_by_id::<CartItem>(&id)
        .is_some_and(|item| item.user_id == user.id);

    if !owned || !store.remove_from_cart(&id) {
        return Err((StatusCode::NOT_FOUND, "Cart item not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

//=========================================================================================
// Enrollment
//=========================================================================================

#[utoipa::path(
    post,
    path = "/api/enrollments",
    request_body = CourseRef,
    responses(
        (status = 201, description = "The new enrollment, active with no progress"),
        (status = 404, description = "Course not found")
    )
)]
pub async fn enroll_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CourseRef>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut store = state.store.write().await;
    ensure_course(&store, &req.course_id)?;

    let enrollment = store.enroll_user(&user.id, &req.course_id);
    info!(user = %user.id, course = %req.course_id, "enrolled");
    Ok((StatusCode::CREATED, Json(enrollment)))
}
