//! Favorite repository implementation.

use tenshoku_core::result::AppResult;
use tenshoku_core::types::{JobId, UserId};
use tenshoku_entity::favorite::Favorite;

use crate::connection::DatabasePool;

/// Repository for per-user job bookmarks.
#[derive(Debug, Clone)]
pub struct FavoriteRepository {
    pool: DatabasePool,
}

impl FavoriteRepository {
    /// Create a new favorite repository.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// List a user's favorites in insertion order.
    pub async fn find_by_user(&self, user_id: &UserId) -> AppResult<Vec<Favorite>> {
        let favorites = self.pool.tables().favorites.read().await;
        Ok(favorites
            .iter()
            .filter(|f| &f.user_id == user_id)
            .cloned()
            .collect())
    }

    /// Find the favorite for a (user, job) pair.
    pub async fn find(&self, user_id: &UserId, job_id: &JobId) -> AppResult<Option<Favorite>> {
        let favorites = self.pool.tables().favorites.read().await;
        Ok(favorites
            .iter()
            .find(|f| &f.user_id == user_id && &f.job_id == job_id)
            .cloned())
    }

    /// Add a favorite unless one already exists for the pair.
    ///
    /// Returns the stored favorite and whether it was newly created. The
    /// lookup and insert share one write guard, so concurrent calls for the
    /// same pair store a single record.
    pub async fn add_if_absent(
        &self,
        user_id: &UserId,
        job_id: &JobId,
    ) -> AppResult<(Favorite, bool)> {
        let mut favorites = self.pool.tables().favorites.write().await;
        if let Some(existing) = favorites
            .iter()
            .find(|f| &f.user_id == user_id && &f.job_id == job_id)
        {
            return Ok((existing.clone(), false));
        }
        let favorite = Favorite::new(user_id.clone(), job_id.clone());
        favorites.push(favorite.clone());
        Ok((favorite, true))
    }

    /// Remove the favorite for a pair. Returns `false` if none existed.
    pub async fn remove(&self, user_id: &UserId, job_id: &JobId) -> AppResult<bool> {
        let mut favorites = self.pool.tables().favorites.write().await;
        match favorites
            .iter()
            .position(|f| &f.user_id == user_id && &f.job_id == job_id)
        {
            Some(index) => {
                favorites.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
