//! User profile handlers.

use axum::Json;
use axum::extract::State;

use tenshoku_entity::application::JobApplication;
use tenshoku_entity::user::User;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/users/me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/users/me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.update_profile(&auth, req.into()).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// GET /api/users/me/applications
pub async fn list_applications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<JobApplication>>>, ApiError> {
    let applications = state.application_service.list_mine(&auth).await?;
    Ok(Json(ApiResponse::ok(applications)))
}
