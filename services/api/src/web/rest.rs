//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the public catalog endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::state::AppState;
use crate::web::{account, admin, auth, tts};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use edubloom_core::domain::{Course, Tutor};
use edubloom_core::enrich::{course_detail, enrich_courses, tutors_with_location};
use edubloom_core::filter::{CategoryFilter, LocationFilter};
use edubloom_core::search::{CourseCriteria, Criteria};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health_handler,
        list_categories_handler,
        list_tutors_handler,
        list_locations_handler,
        list_courses_handler,
        get_course_handler,
        tts::synthesize_handler,
        tts::voices_handler,
        auth::signup_handler,
        auth::login_handler,
        auth::logout_handler,
        auth::session_handler,
        account::nearby_handler,
        account::list_cart_handler,
        account::add_to_cart_handler,
        account::remove_from_cart_handler,
        account::enroll_handler,
        admin::analytics_handler,
        admin::list_users_handler,
        admin::list_courses_handler,
        admin::create_course_handler,
        admin::update_course_handler,
        admin::delete_course_handler,
    ),
    components(
        schemas(
            HealthResponse,
            tts::SynthesizeRequest,
            auth::SignupRequest,
            auth::LoginRequest,
            account::CourseRef,
        )
    ),
    tags(
        (name = "EduBloom Studio API", description = "Catalog, matching, admin and speech endpoints for the tutoring marketplace.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response Structs
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    message: String,
}

//=========================================================================================
// Catalog Handlers
//=========================================================================================

/// Liveness check.
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "The server is running", body = HealthResponse))
)]
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "EduBloom Studio API server is running".to_string(),
    })
}

/// All course categories.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses((status = 200, description = "Categories in store order"))
)]
pub async fn list_categories_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(store.get_categories(&CategoryFilter::new()))
}

/// Every tutor with its location and user attached.
#[utoipa::path(
    get,
    path = "/api/tutors",
    responses((status = 200, description = "Tutors with location and user"))
)]
pub async fn list_tutors_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(tutors_with_location(&store, store.all::<Tutor>()))
}

/// Every known city with its coordinates.
#[utoipa::path(
    get,
    path = "/api/locations",
    responses((status = 200, description = "Locations in store order"))
)]
pub async fn list_locations_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(store.get_locations(&LocationFilter::new()))
}

/// The enriched course catalog, narrowed by the catalog filters.
///
/// `category`, `level` and `format` accept `all` to switch the filter off.
#[utoipa::path(
    get,
    path = "/api/courses",
    params(
        ("search" = Option<String>, Query, description = "Substring of title, instructor or category name"),
        ("category" = Option<String>, Query, description = "Exact category name, or `all`"),
        ("level" = Option<String>, Query, description = "Beginner, Intermediate, Advanced, or `all`"),
        ("format" = Option<String>, Query, description = "Online, In-Person, Hybrid, or `all`")
    ),
    responses(
        (status = 200, description = "Matching enriched courses in store order"),
        (status = 400, description = "Unknown level or format")
    )
)]
pub async fn list_courses_handler(
    State(state): State<Arc<AppState>>,
    Query(criteria): Query<CourseCriteria>,
) -> impl IntoResponse {
    let store = state.store.read().await;
    let catalog = enrich_courses(&store, store.all::<Course>());
    Json(criteria.apply(&catalog))
}

/// One course with its instructor profile.
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = String, Path, description = "Course id")),
    responses(
        (status = 200, description = "The enriched course and its instructor"),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get_course_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let store = state.store.read().await;
    course_detail(&store, &id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Course not found".to_string()))
}
