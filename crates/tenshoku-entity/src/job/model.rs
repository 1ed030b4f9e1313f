//! Job posting entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenshoku_core::types::JobId;

use super::employment::EmploymentType;

/// A job posting in the catalog. Read-only to API clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique job identifier of the form `job-<n>`.
    pub id: JobId,
    /// Position title.
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Work location.
    pub location: String,
    /// Salary range as displayed.
    pub salary: String,
    /// Long-form description.
    pub description: String,
    /// Candidate requirements.
    pub requirements: Vec<String>,
    /// Perks offered.
    pub benefits: Vec<String>,
    /// Technical skills.
    pub skills: Vec<String>,
    /// Contract form.
    pub employment_type: EmploymentType,
    /// Cover image.
    pub image_url: String,
    /// When the posting was published.
    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Whether the title, company, or any skill contains `needle`,
    /// compared case-insensitively. `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.company.to_lowercase().contains(needle)
            || self
                .skills
                .iter()
                .any(|s| s.to_lowercase().contains(needle))
    }

    /// Whether the job has any of `wanted` (case-insensitive equality).
    pub fn has_any_skill(&self, wanted: &[String]) -> bool {
        self.skills.iter().any(|skill| {
            let skill = skill.to_lowercase();
            wanted.iter().any(|w| w.to_lowercase() == skill)
        })
    }

    /// Key for the "recommended" ordering: the job number modulo 7.
    pub fn recommendation_rank(&self) -> u64 {
        self.id.sequence().map(|n| n % 7).unwrap_or(u64::MAX)
    }
}
