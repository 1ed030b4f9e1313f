//! Job catalog and application handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use tenshoku_core::types::JobId;
use tenshoku_entity::application::JobApplication;
use tenshoku_entity::job::Job;

use crate::dto::request::ApplicationRequest;
use crate::dto::response::{ApiResponse, JobListResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, JobQuery, ValidatedJson};
use crate::state::AppState;

/// GET /api/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<JobQuery>,
) -> Result<Json<ApiResponse<JobListResponse>>, ApiError> {
    let page = state.job_service.search(query.into_search()).await?;
    Ok(Json(ApiResponse::ok(JobListResponse {
        jobs: page.items,
        pagination: page.pagination,
    })))
}

/// GET /api/jobs/skills
pub async fn list_skills(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    let skills = state.job_service.skills().await?;
    Ok(Json(ApiResponse::ok(skills)))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<JobId>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let job = state.job_service.get(&id).await?;
    Ok(Json(ApiResponse::ok(job)))
}

/// POST /api/jobs/{id}/apply
pub async fn apply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<JobId>,
    body: Result<ValidatedJson<ApplicationRequest>, ApiError>,
) -> Result<Json<ApiResponse<JobApplication>>, ApiError> {
    // An unknown job is a 404 whatever the body looks like.
    state.job_service.get(&id).await?;
    let ValidatedJson(req) = body?;

    let application = state
        .application_service
        .apply(&auth, &id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(application)))
}
