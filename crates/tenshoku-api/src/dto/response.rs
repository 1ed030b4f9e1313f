//! Response DTOs.

use serde::{Deserialize, Serialize};

use tenshoku_core::types::Pagination;
use tenshoku_entity::job::Job;
use tenshoku_entity::user::User;

/// Standard response envelope.
///
/// `data` is present on success responses that carry a payload, `error` on
/// failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Creates a failed response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// Creates a successful response without a payload.
    pub fn success() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }
}

/// Liveness body of `GET /api`, returned without the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Service banner.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since startup.
    pub uptime_seconds: u64,
    /// Number of jobs in the catalog.
    pub jobs: usize,
    /// Number of registered users.
    pub users: usize,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token.
    pub token: String,
    /// User info.
    pub user: User,
}

/// One page of job search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    /// Jobs on this page.
    pub jobs: Vec<Job>,
    /// Pagination metadata.
    pub pagination: Pagination,
}

/// Favorite membership check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteCheckResponse {
    /// Whether the job is bookmarked.
    pub is_favorite: bool,
}

/// Count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count.
    pub count: u64,
}

/// Bulk update result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkedResponse {
    /// Number of records changed.
    pub marked: u64,
}
