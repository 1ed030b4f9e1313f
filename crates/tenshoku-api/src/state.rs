//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use tenshoku_core::config::AppConfig;
use tenshoku_database::DatabasePool;
use tenshoku_service::{
    ApplicationService, AuthService, FavoriteService, JobService, NotificationService,
    UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process start, for uptime reporting
    pub started_at: Instant,

    // ── Infrastructure ───────────────────────────────────────
    /// In-memory data store
    pub db_pool: DatabasePool,

    // ── Services ─────────────────────────────────────────────
    /// Login, logout, and token resolution
    pub auth_service: Arc<AuthService>,
    /// Profile viewing and editing
    pub user_service: Arc<UserService>,
    /// Job catalog search
    pub job_service: Arc<JobService>,
    /// Job applications
    pub application_service: Arc<ApplicationService>,
    /// Favorites
    pub favorite_service: Arc<FavoriteService>,
    /// Notification feed
    pub notification_service: Arc<NotificationService>,
}
