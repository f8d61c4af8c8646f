pub mod account;
pub mod admin;
pub mod auth;
pub mod middleware;
pub mod rest;
pub mod state;
pub mod tts;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

pub use middleware::{require_admin, require_auth};
pub use state::AppState;

/// Builds every API route over `app_state`.
///
/// Transport layers (CORS, tracing, static files) are added by the binary.
/// Auth runs as a route layer so unmatched paths still reach the 404 fallback.
pub fn api_router(app_state: Arc<AppState>) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/api/health", get(rest::health_handler))
        .route("/api/categories", get(rest::list_categories_handler))
        .route("/api/tutors", get(rest::list_tutors_handler))
        .route("/api/locations", get(rest::list_locations_handler))
        .route("/api/courses", get(rest::list_courses_handler))
        .route("/api/courses/{id}", get(rest::get_course_handler))
        .route("/api/elevenlabs/synthesize", post(tts::synthesize_handler))
        .route("/api/elevenlabs/voices", get(tts::voices_handler))
        .route("/auth/signup", post(auth::signup_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/logout", post(auth::logout_handler))
        .route("/auth/session", get(auth::session_handler));

    // Protected routes (auth required)
    let protected_routes = Router::new()
        .route("/api/matching/nearby", get(account::nearby_handler))
        .route(
            "/api/cart",
            get(account::list_cart_handler).post(account::add_to_cart_handler),
        )
        .route("/api/cart/{id}", delete(account::remove_from_cart_handler))
        .route("/api/enrollments", post(account::enroll_handler))
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            require_auth,
        ));

    // Admin routes (auth and the admin role required)
    let admin_routes = Router::new()
        .route("/api/admin/analytics", get(admin::analytics_handler))
        .route("/api/admin/users", get(admin::list_users_handler))
        .route(
            "/api/admin/courses",
            get(admin::list_courses_handler).post(admin::create_course_handler),
        )
        .route(
            "/api/admin/courses/{id}",
            put(admin::update_course_handler).delete(admin::delete_course_handler),
        )
        .route_layer(axum_middleware::from_fn(require_admin))
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            require_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .with_state(app_state)
}
