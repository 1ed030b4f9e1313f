//! Applying to jobs.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use tenshoku_core::config::JobsConfig;
use tenshoku_core::error::AppError;
use tenshoku_core::types::JobId;
use tenshoku_database::repositories::{ApplicationRepository, JobRepository};
use tenshoku_entity::application::{CreateApplication, JobApplication};

use super::service::JOB_NOT_FOUND;
use crate::context::RequestContext;

/// Applicant details submitted with an application.
#[derive(Debug, Clone, Default)]
pub struct ApplyRequest {
    /// Applicant name.
    pub name: String,
    /// Applicant phone.
    pub phone: String,
    /// Applicant address.
    pub address: String,
    /// Cover message.
    pub message: String,
}

/// Creates and lists job applications.
#[derive(Debug, Clone)]
pub struct ApplicationService {
    /// Job repository, for existence checks.
    job_repo: Arc<JobRepository>,
    /// Application repository.
    app_repo: Arc<ApplicationRepository>,
    /// Artificial latency settings.
    config: JobsConfig,
}

impl ApplicationService {
    /// Creates a new application service.
    pub fn new(
        job_repo: Arc<JobRepository>,
        app_repo: Arc<ApplicationRepository>,
        config: JobsConfig,
    ) -> Self {
        Self {
            job_repo,
            app_repo,
            config,
        }
    }

    /// Submit a `pending` application for `job_id`.
    pub async fn apply(
        &self,
        ctx: &RequestContext,
        job_id: &JobId,
        req: ApplyRequest,
    ) -> Result<JobApplication, AppError> {
        if !self.job_repo.exists(job_id).await? {
            return Err(AppError::not_found(JOB_NOT_FOUND));
        }

        if self.config.apply_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.apply_delay_ms)).await;
        }

        let application = self
            .app_repo
            .create(JobApplication::new(CreateApplication {
                job_id: job_id.clone(),
                user_id: ctx.user_id.clone(),
                name: req.name,
                phone: req.phone,
                address: req.address,
                message: req.message,
            }))
            .await?;

        info!(
            user_id = %ctx.user_id,
            job_id = %job_id,
            application_id = %application.id,
            "Application submitted"
        );
        Ok(application)
    }

    /// The caller's applications, newest first.
    pub async fn list_mine(&self, ctx: &RequestContext) -> Result<Vec<JobApplication>, AppError> {
        self.app_repo.find_by_user(&ctx.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use tenshoku_core::error::ErrorKind;
    use tenshoku_entity::application::ApplicationStatus;

    use crate::testing::TestServices;

    use super::*;

    fn request() -> ApplyRequest {
        ApplyRequest {
            name: "山田 太郎".into(),
            phone: "090-1234-5678".into(),
            address: "東京都渋谷区".into(),
            message: "よろしくお願いします。".into(),
        }
    }

    #[tokio::test]
    async fn test_apply_creates_pending_application() {
        let services = TestServices::seeded().await;
        let ctx = services.login().await;

        let app = services
            .applications
            .apply(&ctx, &JobId::from("job-3"), request())
            .await
            .unwrap();
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.user_id, ctx.user_id);

        let mine = services.applications.list_mine(&ctx).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, app.id);
    }

    #[tokio::test]
    async fn test_apply_to_missing_job() {
        let services = TestServices::seeded().await;
        let ctx = services.login().await;
        let err = services
            .applications
            .apply(&ctx, &JobId::from("job-0"), request())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_job_is_rejected_before_delay() {
        let services = TestServices::seeded().await;
        let ctx = services.login().await;
        let delayed = ApplicationService::new(
            services.job_repo.clone(),
            Arc::new(ApplicationRepository::new(
                tenshoku_database::DatabasePool::in_memory(),
            )),
            JobsConfig {
                apply_delay_ms: 1_500,
                ..JobsConfig::default()
            },
        );

        let started = tokio::time::Instant::now();
        let err = delayed
            .apply(&ctx, &JobId::from("job-9999"), request())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(started.elapsed() < Duration::from_millis(1_500));

        delayed
            .apply(&ctx, &JobId::from("job-1"), request())
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1_500));
    }
}
