//! Fixture loading configuration.

use serde::{Deserialize, Serialize};

/// Controls the fixtures loaded into the in-memory store at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether to load the demo user, job catalog, and notifications.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Number of jobs generated into the catalog.
    #[serde(default = "default_job_count")]
    pub job_count: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            job_count: default_job_count(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_job_count() -> usize {
    50
}
