//! Notification handlers.

use axum::Json;
use axum::extract::{Path, State};

use tenshoku_core::types::NotificationId;
use tenshoku_entity::notification::Notification;
use tenshoku_service::notification::NotificationFeed;

use crate::dto::response::{ApiResponse, CountResponse, MarkedResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<NotificationFeed>>, ApiError> {
    let feed = state.notification_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(feed)))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.notification_service.unread_count(&auth).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// POST /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<NotificationId>,
) -> Result<Json<ApiResponse<Notification>>, ApiError> {
    let notification = state.notification_service.mark_read(&auth, &id).await?;
    Ok(Json(ApiResponse::ok(notification)))
}

/// POST /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MarkedResponse>>, ApiError> {
    let marked = state.notification_service.mark_all_read(&auth).await?;
    Ok(Json(ApiResponse::ok(MarkedResponse { marked })))
}
