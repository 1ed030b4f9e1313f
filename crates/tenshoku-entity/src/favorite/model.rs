//! Favorite entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenshoku_core::types::{FavoriteId, JobId, UserId};

use crate::job::Job;

/// A user's bookmark of a job posting. At most one per (user, job).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Unique favorite identifier.
    pub id: FavoriteId,
    /// The owning user.
    pub user_id: UserId,
    /// The bookmarked job.
    pub job_id: JobId,
    /// When the bookmark was added.
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Build a new favorite for `user_id` and `job_id`.
    pub fn new(user_id: UserId, job_id: JobId) -> Self {
        Self {
            id: FavoriteId::generate(),
            user_id,
            job_id,
            created_at: Utc::now(),
        }
    }
}

/// A favorite joined with the job it points to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteWithJob {
    /// The favorite record, flattened into the top level.
    #[serde(flatten)]
    pub favorite: Favorite,
    /// The bookmarked job.
    pub job: Job,
}
