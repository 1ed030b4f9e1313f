//! Job listing and application configuration.

use serde::{Deserialize, Serialize};

/// Job listing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsConfig {
    /// Page size used when the client does not send `limit`.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Upper bound for the `limit` query parameter.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
    /// Artificial delay before answering a job search, in milliseconds.
    #[serde(default)]
    pub search_delay_ms: u64,
    /// Artificial delay before accepting an application, in milliseconds.
    #[serde(default)]
    pub apply_delay_ms: u64,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            search_delay_ms: 0,
            apply_delay_ms: 0,
        }
    }
}

fn default_page_size() -> u64 {
    9
}

fn default_max_page_size() -> u64 {
    100
}
