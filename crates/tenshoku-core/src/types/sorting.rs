//! Sort orders for the job listing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordering applied to job search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSort {
    /// Newest postings first.
    Newest,
    /// Deterministic "recommended" order.
    #[default]
    Recommended,
}

impl JobSort {
    /// Return the sort as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Recommended => "recommended",
        }
    }

    /// Parse a query value, falling back to [`JobSort::Recommended`] for
    /// anything unrecognised.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for JobSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobSort {
    type Err = crate::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "recommended" => Ok(Self::Recommended),
            _ => Err(crate::AppError::validation(format!(
                "Invalid sort: '{s}'. Expected one of: newest, recommended"
            ))),
        }
    }
}
