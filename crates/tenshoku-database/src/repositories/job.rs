//! Job catalog repository implementation.
//!
//! Search runs in four steps over a snapshot of the catalog: text filter,
//! location filter, skill filter, then sort and slice.

use std::collections::BTreeSet;

use tenshoku_core::result::AppResult;
use tenshoku_core::types::{JobFilter, JobId, JobSort, PageRequest, PageResponse};
use tenshoku_entity::job::Job;

use crate::connection::DatabasePool;

/// Repository for the read-only job catalog.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: DatabasePool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Find a job by id.
    pub async fn find_by_id(&self, id: &JobId) -> AppResult<Option<Job>> {
        let jobs = self.pool.tables().jobs.read().await;
        Ok(jobs.iter().find(|j| &j.id == id).cloned())
    }

    /// Whether a job with this id exists.
    pub async fn exists(&self, id: &JobId) -> AppResult<bool> {
        let jobs = self.pool.tables().jobs.read().await;
        Ok(jobs.iter().any(|j| &j.id == id))
    }

    /// Filter, sort, and paginate the catalog.
    pub async fn search(
        &self,
        filter: &JobFilter,
        sort: JobSort,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Job>> {
        let mut matched: Vec<Job> = {
            let jobs = self.pool.tables().jobs.read().await;
            let needle = filter.search.as_deref().map(str::to_lowercase);
            jobs.iter()
                .filter(|job| needle.as_deref().is_none_or(|n| job.matches_text(n)))
                .filter(|job| {
                    filter
                        .location
                        .as_deref()
                        .is_none_or(|loc| job.location.contains(loc))
                })
                .filter(|job| filter.skills.is_empty() || job.has_any_skill(&filter.skills))
                .cloned()
                .collect()
        };

        // Both sorts are stable, so equal keys keep catalog order.
        match sort {
            JobSort::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            JobSort::Recommended => matched.sort_by_key(Job::recommendation_rank),
        }

        Ok(PageResponse::paginate(matched, page))
    }

    /// Every skill in the catalog, deduplicated and sorted ascending.
    pub async fn all_skills(&self) -> AppResult<Vec<String>> {
        let jobs = self.pool.tables().jobs.read().await;
        let skills: BTreeSet<&str> = jobs
            .iter()
            .flat_map(|j| j.skills.iter().map(String::as_str))
            .collect();
        Ok(skills.into_iter().map(str::to_string).collect())
    }

    /// Append jobs to the catalog.
    pub async fn insert_many(&self, new_jobs: Vec<Job>) -> AppResult<usize> {
        let mut jobs = self.pool.tables().jobs.write().await;
        let count = new_jobs.len();
        jobs.extend(new_jobs);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::catalog::generate_jobs;

    async fn repo(count: usize) -> JobRepository {
        let repo = JobRepository::new(DatabasePool::in_memory());
        repo.insert_many(generate_jobs(count)).await.unwrap();
        repo
    }

    fn page(page: u64, limit: u64) -> PageRequest {
        PageRequest::new(page, limit, 100)
    }

    #[tokio::test]
    async fn test_search_never_exceeds_limit() {
        let repo = repo(50).await;
        let first = repo
            .search(&JobFilter::default(), JobSort::Recommended, &page(1, 9))
            .await
            .unwrap();
        assert_eq!(first.items.len(), 9);
        assert_eq!(first.pagination.total, 50);
        assert_eq!(first.pagination.total_pages, 6);
        assert!(first.pagination.has_more);

        let last = repo
            .search(&JobFilter::default(), JobSort::Recommended, &page(6, 9))
            .await
            .unwrap();
        assert_eq!(last.items.len(), 5);
        assert!(!last.pagination.has_more);
    }

    #[tokio::test]
    async fn test_recommended_order_is_stable_by_mod_seven() {
        let repo = repo(20).await;
        let result = repo
            .search(&JobFilter::default(), JobSort::Recommended, &page(1, 20))
            .await
            .unwrap();
        let ids: Vec<&str> = result.items.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(&ids[..4], &["job-7", "job-14", "job-1", "job-8"]);
        let ranks: Vec<u64> = result.items.iter().map(Job::recommendation_rank).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn test_newest_order_is_date_descending() {
        let repo = repo(10).await;
        let result = repo
            .search(&JobFilter::default(), JobSort::Newest, &page(1, 10))
            .await
            .unwrap();
        assert_eq!(result.items[0].id.as_str(), "job-1");
        assert!(
            result
                .items
                .windows(2)
                .all(|w| w[0].created_at >= w[1].created_at)
        );
    }

    #[tokio::test]
    async fn test_text_location_and_skill_filters() {
        let repo = repo(50).await;

        let text = JobFilter::from_query(Some("kubernetes"), None, None);
        let result = repo
            .search(&text, JobSort::Recommended, &page(1, 100))
            .await
            .unwrap();
        assert!(result.items.iter().all(|j| j.matches_text("kubernetes")));
        assert!(result.pagination.total > 0);

        let remote = JobFilter::from_query(None, Some("フルリモート"), None);
        let result = repo
            .search(&remote, JobSort::Recommended, &page(1, 100))
            .await
            .unwrap();
        assert!(!result.items.is_empty());
        assert!(result.items.iter().all(|j| j.location == "フルリモート"));

        let skills = JobFilter::from_query(None, None, Some("swift,FIGMA"));
        let result = repo
            .search(&skills, JobSort::Recommended, &page(1, 100))
            .await
            .unwrap();
        assert!(!result.items.is_empty());
        assert!(result.items.iter().all(|j| {
            j.skills
                .iter()
                .any(|s| s.eq_ignore_ascii_case("swift") || s.eq_ignore_ascii_case("figma"))
        }));
    }

    #[tokio::test]
    async fn test_no_matches_yields_zero_pages() {
        let repo = repo(50).await;
        let filter = JobFilter::from_query(Some("cobol"), None, None);
        let result = repo
            .search(&filter, JobSort::Newest, &page(1, 9))
            .await
            .unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.pagination.total_pages, 0);
        assert!(!result.pagination.has_more);
    }

    #[tokio::test]
    async fn test_all_skills_sorted_and_unique() {
        let repo = repo(50).await;
        let skills = repo.all_skills().await.unwrap();
        assert!(skills.windows(2).all(|w| w[0] < w[1]));
        assert!(skills.contains(&"React".to_string()));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = repo(3).await;
        let job = repo.find_by_id(&JobId::from("job-2")).await.unwrap();
        assert_eq!(job.unwrap().title, "バックエンドエンジニア");
        assert!(!repo.exists(&JobId::from("job-99")).await.unwrap());
    }
}
