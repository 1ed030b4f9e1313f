//! Route definitions for the TenShoku HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let server = &state.config.server;

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(job_routes())
        .merge(favorite_routes())
        .merge(notification_routes());

    Router::new()
        .route("/api", get(handlers::health::status))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(server.request_timeout_seconds.max(1)),
        ))
        .layer(middleware::compression::build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors::build_cors_layer(&server.cors))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Enveloped health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Login and logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// User self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/me",
            get(handlers::user::get_profile).put(handlers::user::update_profile),
        )
        .route(
            "/users/me/applications",
            get(handlers::user::list_applications),
        )
}

/// Job search, detail, and applications
fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(handlers::job::list_jobs))
        .route("/jobs/skills", get(handlers::job::list_skills))
        .route("/jobs/{id}", get(handlers::job::get_job))
        .route("/jobs/{id}/apply", post(handlers::job::apply))
}

/// Favorites
fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(handlers::favorite::list_favorites))
        .route(
            "/favorites/check/{job_id}",
            get(handlers::favorite::check_favorite),
        )
        .route(
            "/favorites/{job_id}",
            post(handlers::favorite::add_favorite).delete(handlers::favorite::remove_favorite),
        )
}

/// Notification feed
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/read-all",
            post(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{id}/read",
            post(handlers::notification::mark_read),
        )
}
