//! Favorite handlers.

use axum::Json;
use axum::extract::{Path, State};

use tenshoku_core::types::JobId;
use tenshoku_entity::favorite::{Favorite, FavoriteWithJob};

use crate::dto::response::{ApiResponse, FavoriteCheckResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<FavoriteWithJob>>>, ApiError> {
    let favorites = state.favorite_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(favorites)))
}

/// GET /api/favorites/check/{job_id}
pub async fn check_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<JobId>,
) -> Result<Json<ApiResponse<FavoriteCheckResponse>>, ApiError> {
    let is_favorite = state.favorite_service.is_favorite(&auth, &job_id).await?;
    Ok(Json(ApiResponse::ok(FavoriteCheckResponse { is_favorite })))
}

/// POST /api/favorites/{job_id}
pub async fn add_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<JobId>,
) -> Result<Json<ApiResponse<Favorite>>, ApiError> {
    let favorite = state.favorite_service.add(&auth, &job_id).await?;
    Ok(Json(ApiResponse::ok(favorite)))
}

/// DELETE /api/favorites/{job_id}
pub async fn remove_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<JobId>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.favorite_service.remove(&auth, &job_id).await?;
    Ok(Json(ApiResponse::success()))
}
