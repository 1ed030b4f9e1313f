//! Application builder: wires store, services, router, and middleware into
//! an Axum app and serves it.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use tracing::info;

use tenshoku_auth::{PasswordHasher, SessionStore, TokenGenerator};
use tenshoku_core::config::AppConfig;
use tenshoku_core::error::{AppError, ErrorKind};
use tenshoku_database::DatabasePool;
use tenshoku_database::repositories::{
    ApplicationRepository, FavoriteRepository, JobRepository, NotificationRepository,
    UserRepository,
};
use tenshoku_database::seed;
use tenshoku_service::{
    ApplicationService, AuthService, FavoriteService, JobService, NotificationService,
    UserService,
};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Construct the store, load fixtures, and wire every service.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    // ── Step 1: Data store ───────────────────────────────────────
    let db_pool = DatabasePool::in_memory();
    let password_hasher = Arc::new(PasswordHasher::new());

    if config.seed.enabled {
        let hash = password_hasher.hash_password(seed::fixtures::DEMO_PASSWORD)?;
        seed::load(&db_pool, &config.seed, hash).await?;
    } else {
        info!("Seed fixtures disabled; starting with an empty store");
    }

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let job_repo = Arc::new(JobRepository::new(db_pool.clone()));
    let application_repo = Arc::new(ApplicationRepository::new(db_pool.clone()));
    let favorite_repo = Arc::new(FavoriteRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));

    // ── Step 3: Sessions ─────────────────────────────────────────
    let session_store = Arc::new(SessionStore::new(
        &config.session,
        TokenGenerator::new(&config.auth),
    ));

    // ── Step 4: Services ─────────────────────────────────────────
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&session_store),
    ));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));
    let job_service = Arc::new(JobService::new(
        Arc::clone(&job_repo),
        config.jobs.clone(),
    ));
    let application_service = Arc::new(ApplicationService::new(
        Arc::clone(&job_repo),
        Arc::clone(&application_repo),
        config.jobs.clone(),
    ));
    let favorite_service = Arc::new(FavoriteService::new(
        Arc::clone(&favorite_repo),
        Arc::clone(&job_repo),
    ));
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&notification_repo)));

    Ok(AppState {
        config: Arc::new(config),
        started_at: Instant::now(),
        db_pool,
        auth_service,
        user_service,
        job_service,
        application_service,
        favorite_service,
        notification_service,
    })
}

/// Runs the TenShoku server until Ctrl-C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting TenShoku API v{}", env!("CARGO_PKG_VERSION"));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}: {e}"), e)
    })?;

    info!("TenShoku API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, format!("Server error: {e}"), e))?;

    info!("TenShoku API shut down gracefully");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
