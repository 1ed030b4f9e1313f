//! Query parameters of the job listing.

use serde::{Deserialize, Serialize};

use tenshoku_core::types::{JobFilter, JobSort};
use tenshoku_service::job::JobSearch;

/// Raw `GET /api/jobs` query.
///
/// Numbers are parsed leniently: anything that is not an integer falls back
/// to the default, and values below 1 are clamped later.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobQuery {
    /// Page number (1-based).
    pub page: Option<String>,
    /// Items per page.
    pub limit: Option<String>,
    /// Free-text search.
    pub search: Option<String>,
    /// Location substring, or `all`.
    pub location: Option<String>,
    /// `newest` or `recommended`.
    pub sort: Option<String>,
    /// Comma-separated skill names.
    pub skills: Option<String>,
}

fn parse_count(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map(|n| u64::try_from(n).unwrap_or(0))
}

impl JobQuery {
    /// Convert into a service-level search.
    pub fn into_search(self) -> JobSearch {
        JobSearch {
            page: parse_count(self.page.as_deref()),
            limit: parse_count(self.limit.as_deref()),
            filter: JobFilter::from_query(
                self.search.as_deref(),
                self.location.as_deref(),
                self.skills.as_deref(),
            ),
            sort: self
                .sort
                .as_deref()
                .map(JobSort::parse_lenient)
                .unwrap_or_default(),
        }
    }
}
