//! Maps domain `AppError` to HTTP responses.
//!
//! `AppError` lives in `tenshoku-core`, so the HTTP conversion goes through
//! the local [`ApiError`] wrapper. Handlers return `Result<_, ApiError>` and
//! propagate service errors with `?`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tenshoku_core::error::{AppError, ErrorKind};

use crate::dto::response::ApiResponse;

/// An `AppError` on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal | ErrorKind::Configuration | ErrorKind::Serialization => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError(err) = self;
        let status = status_for(err.kind);
        if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
        }

        (status, Json(ApiResponse::<()>::error(err.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_envelope() {
        let response = ApiError::from(AppError::not_found("求人が見つかりません")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "求人が見つかりません");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::Authentication), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorKind::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(ErrorKind::Serialization),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_question_mark_converts_app_error() {
        fn fails() -> Result<(), ApiError> {
            Err(AppError::authentication("認証が必要です"))?;
            Ok(())
        }
        let ApiError(err) = fails().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }
}
