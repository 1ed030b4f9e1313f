//! # tenshoku-api
//!
//! HTTP API layer for TenShoku built on Axum.
//!
//! Provides all REST endpoints, middleware (CORS, compression, request
//! logging), extractors (bearer session, validated JSON, job search query),
//! DTOs, and the `ApiError` mapping from `AppError` to the
//! `{ success, data, error }` response envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
