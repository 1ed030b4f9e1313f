//! Authentication handlers.

use axum::Json;
use axum::extract::State;

use tenshoku_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse};
use crate::error::ApiError;
use crate::extractors::{BearerToken, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    if req.password.chars().count() > state.config.auth.password_max_length {
        return Err(AppError::validation("パスワードが長すぎます").into());
    }

    let result = state.auth_service.login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::ok(LoginResponse {
        token: result.token,
        user: result.user,
    })))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Json<ApiResponse<()>> {
    state.auth_service.logout(token.as_deref()).await;
    Json(ApiResponse::success())
}
