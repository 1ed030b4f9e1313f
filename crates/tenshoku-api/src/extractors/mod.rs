//! Custom Axum extractors.

pub mod auth;
pub mod job_query;
pub mod json;

pub use auth::{AuthUser, BearerToken};
pub use job_query::JobQuery;
pub use json::ValidatedJson;
