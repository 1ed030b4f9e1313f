//! Demo fixtures loaded into the store at startup.

pub mod catalog;
pub mod fixtures;

use tracing::info;

use tenshoku_core::config::SeedConfig;
use tenshoku_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::repositories::{JobRepository, NotificationRepository, UserRepository};

/// Load the demo user, job catalog, and notifications.
///
/// `password_hash` is the already-hashed password of the demo account
/// (see [`fixtures::DEMO_PASSWORD`]).
pub async fn load(pool: &DatabasePool, config: &SeedConfig, password_hash: String) -> AppResult<()> {
    let users = UserRepository::new(pool.clone());
    let jobs = JobRepository::new(pool.clone());
    let notifications = NotificationRepository::new(pool.clone());

    let user = fixtures::demo_user(password_hash);
    let user_id = user.id.clone();
    users.upsert(user).await?;

    let job_count = jobs.insert_many(catalog::generate_jobs(config.job_count)).await?;

    let seeded = fixtures::demo_notifications(&user_id);
    let notification_count = seeded.len();
    for n in seeded {
        notifications.create(n).await?;
    }

    info!(
        user_id = %user_id,
        jobs = job_count,
        notifications = notification_count,
        "Loaded seed fixtures"
    );
    Ok(())
}
