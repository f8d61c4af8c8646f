//! services/api/src/web/admin.rs
//!
//! Admin dashboard handlers. Mounted behind `require_auth` and `require_admin`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use edubloom_core::analytics::PlatformAnalytics;
use edubloom_core::domain::{Course, NewCourse, Role};
use edubloom_core::filter::UserFilter;
use edubloom_core::patch::CoursePatch;
use edubloom_core::search::{AdminCourseCriteria, Criteria};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::web::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub role: Option<Role>,
}

#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    responses(
        (status = 200, description = "Platform totals and top categories"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn analytics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(PlatformAnalytics::compute(&store))
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(("role" = Option<String>, Query, description = "student, tutor or admin")),
    responses(
        (status = 200, description = "Users in store order"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn list_users_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserQuery>,
) -> impl IntoResponse {
    let filter = match query.role {
        Some(role) => UserFilter::new().role(role),
        None => UserFilter::new(),
    };
    let store = state.store.read().await;
    Json(store.get_users(&filter))
}

#[utoipa::path(
    get,
    path = "/api/admin/courses",
    params(
        ("search" = Option<String>, Query, description = "Substring of title or description"),
        ("categoryId" = Option<String>, Query, description = "Exact category id, or `all`"),
        ("level" = Option<String>, Query, description = "Beginner, Intermediate, Advanced, or `all`")
    ),
    responses(
        (status = 200, description = "Matching courses in store order"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn list_courses_handler(
    State(state): State<Arc<AppState>>,
    Query(criteria): Query<AdminCourseCriteria>,
) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(criteria.apply(store.all::<Course>()))
}

#[utoipa::path(
    post,
    path = "/api/admin/courses",
    request_body(content = serde_json::Value, description = "A new course: every course field except id and timestamps"),
    responses(
        (status = 201, description = "The created course"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn create_course_handler(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<NewCourse>,
) -> impl IntoResponse {
    let course = state.store.write().await.create_course(draft);
    info!(id = %course.id, title = %course.title, "course created");
    (StatusCode::CREATED, Json(course))
}

#[utoipa::path(
    put,
    path = "/api/admin/courses/{id}",
    params(("id" = String, Path, description = "Course id")),
    request_body(content = serde_json::Value, description = "Any subset of course fields to change"),
    responses(
        (status = 200, description = "The updated course"),
        (status = 404, description = "Course not found")
    )
)]
pub async fn update_course_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<CoursePatch>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .store
        .write()
        .await
        .update_course(&id, patch)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Course not found".to_string()))
}

#[utoipa::path(
    delete,
    path = "/api/admin/courses/{id}",
    params(("id" = String, Path, description = "Course id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Course not found")
    )
)]
pub async fn delete_course_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if state.store.write().await.delete_course(&id) {
        info!(%id, "course deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Course not found".to_string()))
    }
}
