//! Favorite management: list, check, add, remove.

use std::sync::Arc;

use tracing::info;

use tenshoku_core::error::AppError;
use tenshoku_core::types::JobId;
use tenshoku_database::repositories::{FavoriteRepository, JobRepository};
use tenshoku_entity::favorite::{Favorite, FavoriteWithJob};

use crate::context::RequestContext;
use crate::job::JOB_NOT_FOUND;

/// Message returned when removing a favorite that does not exist.
pub const FAVORITE_NOT_FOUND: &str = "お気に入りが見つかりません";

/// Manages the caller's bookmarked jobs.
#[derive(Debug, Clone)]
pub struct FavoriteService {
    /// Favorite repository.
    fav_repo: Arc<FavoriteRepository>,
    /// Job repository, for joins and existence checks.
    job_repo: Arc<JobRepository>,
}

impl FavoriteService {
    /// Creates a new favorite service.
    pub fn new(fav_repo: Arc<FavoriteRepository>, job_repo: Arc<JobRepository>) -> Self {
        Self { fav_repo, job_repo }
    }

    /// The caller's favorites joined with their jobs.
    ///
    /// Favorites pointing at a job that no longer exists are skipped.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<FavoriteWithJob>, AppError> {
        let favorites = self.fav_repo.find_by_user(&ctx.user_id).await?;
        let mut joined = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            if let Some(job) = self.job_repo.find_by_id(&favorite.job_id).await? {
                joined.push(FavoriteWithJob { favorite, job });
            }
        }
        Ok(joined)
    }

    /// Whether the caller has bookmarked `job_id`.
    pub async fn is_favorite(&self, ctx: &RequestContext, job_id: &JobId) -> Result<bool, AppError> {
        Ok(self.fav_repo.find(&ctx.user_id, job_id).await?.is_some())
    }

    /// Bookmark `job_id`. Adding an existing favorite returns it unchanged.
    pub async fn add(&self, ctx: &RequestContext, job_id: &JobId) -> Result<Favorite, AppError> {
        if !self.job_repo.exists(job_id).await? {
            return Err(AppError::not_found(JOB_NOT_FOUND));
        }

        let (favorite, created) = self.fav_repo.add_if_absent(&ctx.user_id, job_id).await?;
        if created {
            info!(user_id = %ctx.user_id, job_id = %job_id, "Favorite added");
        }
        Ok(favorite)
    }

    /// Remove the bookmark for `job_id`.
    pub async fn remove(&self, ctx: &RequestContext, job_id: &JobId) -> Result<(), AppError> {
        if !self.fav_repo.remove(&ctx.user_id, job_id).await? {
            return Err(AppError::not_found(FAVORITE_NOT_FOUND));
        }
        info!(user_id = %ctx.user_id, job_id = %job_id, "Favorite removed");
        Ok(())
    }
}
