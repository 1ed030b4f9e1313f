//! Job catalog browsing and search.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use tenshoku_core::config::JobsConfig;
use tenshoku_core::error::AppError;
use tenshoku_core::types::{JobFilter, JobId, JobSort, PageRequest, PageResponse};
use tenshoku_database::repositories::JobRepository;
use tenshoku_entity::job::Job;

/// Message returned for an unknown job id.
pub const JOB_NOT_FOUND: &str = "求人が見つかりません";

/// A job search as submitted by the client, before clamping.
#[derive(Debug, Clone, Default)]
pub struct JobSearch {
    /// Requested page (1-based).
    pub page: Option<u64>,
    /// Requested page size.
    pub limit: Option<u64>,
    /// Filter criteria.
    pub filter: JobFilter,
    /// Sort order.
    pub sort: JobSort,
}

/// Read-only access to the job catalog.
#[derive(Debug, Clone)]
pub struct JobService {
    /// Job repository.
    job_repo: Arc<JobRepository>,
    /// Paging limits and artificial latency.
    config: JobsConfig,
}

impl JobService {
    /// Creates a new job service.
    pub fn new(job_repo: Arc<JobRepository>, config: JobsConfig) -> Self {
        Self { job_repo, config }
    }

    /// Search the catalog.
    pub async fn search(&self, search: JobSearch) -> Result<PageResponse<Job>, AppError> {
        if self.config.search_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.search_delay_ms)).await;
        }

        let page = PageRequest::new(
            search.page.unwrap_or(1),
            search.limit.unwrap_or(self.config.default_page_size),
            self.config.max_page_size,
        );

        let result = self.job_repo.search(&search.filter, search.sort, &page).await?;
        debug!(
            total = result.pagination.total,
            page = page.page,
            limit = page.limit,
            sort = %search.sort,
            "Job search"
        );
        Ok(result)
    }

    /// Get a single job.
    pub async fn get(&self, id: &JobId) -> Result<Job, AppError> {
        self.job_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(JOB_NOT_FOUND))
    }

    /// Every distinct skill in the catalog, sorted.
    pub async fn skills(&self) -> Result<Vec<String>, AppError> {
        self.job_repo.all_skills().await
    }
}

#[cfg(test)]
mod tests {
    use tenshoku_core::error::ErrorKind;

    use crate::testing::TestServices;

    use super::*;

    #[tokio::test]
    async fn test_defaults_and_clamping() {
        let services = TestServices::seeded().await;

        let default = services.jobs.search(JobSearch::default()).await.unwrap();
        assert_eq!(default.pagination.page, 1);
        assert_eq!(default.pagination.limit, 9);
        assert_eq!(default.items.len(), 9);

        let huge = services
            .jobs
            .search(JobSearch {
                page: Some(0),
                limit: Some(10_000),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(huge.pagination.page, 1);
        assert_eq!(huge.pagination.limit, 100);
        assert_eq!(huge.items.len(), 50);
        assert!(!huge.pagination.has_more);
    }

    #[tokio::test]
    async fn test_get_unknown_job() {
        let services = TestServices::seeded().await;
        let err = services.jobs.get(&JobId::from("job-999")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, JOB_NOT_FOUND);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_delay_is_applied() {
        let mut services = TestServices::seeded().await;
        services.jobs = JobService::new(
            services.job_repo.clone(),
            JobsConfig {
                search_delay_ms: 500,
                ..JobsConfig::default()
            },
        );
        let started = tokio::time::Instant::now();
        services.jobs.search(JobSearch::default()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
