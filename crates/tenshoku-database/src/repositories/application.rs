//! Job application repository implementation.

use tenshoku_core::result::AppResult;
use tenshoku_core::types::UserId;
use tenshoku_entity::application::JobApplication;

use crate::connection::DatabasePool;

/// Repository for submitted job applications.
#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    pool: DatabasePool,
}

impl ApplicationRepository {
    /// Create a new application repository.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Store a new application and return it.
    pub async fn create(&self, application: JobApplication) -> AppResult<JobApplication> {
        let mut applications = self.pool.tables().applications.write().await;
        applications.push(application.clone());
        Ok(application)
    }

    /// List a user's applications, newest first.
    pub async fn find_by_user(&self, user_id: &UserId) -> AppResult<Vec<JobApplication>> {
        let applications = self.pool.tables().applications.read().await;
        let mut found: Vec<JobApplication> = applications
            .iter()
            .filter(|a| &a.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use tenshoku_core::types::JobId;
    use tenshoku_entity::application::{ApplicationStatus, CreateApplication};

    use super::*;

    fn input(user: &str, job: &str) -> CreateApplication {
        CreateApplication {
            job_id: JobId::from(job),
            user_id: UserId::from(user),
            name: "山田".into(),
            phone: "090".into(),
            address: "東京".into(),
            message: "よろしくお願いします".into(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_by_user() {
        let repo = ApplicationRepository::new(DatabasePool::in_memory());
        let created = repo
            .create(JobApplication::new(input("user-1", "job-1")))
            .await
            .unwrap();
        assert_eq!(created.status, ApplicationStatus::Pending);
        repo.create(JobApplication::new(input("user-2", "job-1")))
            .await
            .unwrap();
        repo.create(JobApplication::new(input("user-1", "job-2")))
            .await
            .unwrap();

        let mine = repo.find_by_user(&UserId::from("user-1")).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|a| a.user_id.as_str() == "user-1"));
        assert!(mine[0].created_at >= mine[1].created_at);
    }
}
