//! Filter criteria for job search.

use serde::{Deserialize, Serialize};

/// Location value meaning "no location filter".
const ANY_LOCATION: &str = "all";

/// Criteria narrowing the job catalog. Empty fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilter {
    /// Free-text query matched against title, company, and skills.
    pub search: Option<String>,
    /// Substring of the job location.
    pub location: Option<String>,
    /// Jobs must carry at least one of these skills.
    pub skills: Vec<String>,
}

impl JobFilter {
    /// Build a filter from raw query values.
    ///
    /// Values are matched as given, without trimming. Empty strings become
    /// `None`, the location `"all"` disables location filtering, and
    /// `skills` is a comma-separated list with empty entries dropped.
    pub fn from_query(
        search: Option<&str>,
        location: Option<&str>,
        skills: Option<&str>,
    ) -> Self {
        let non_empty = |s: Option<&str>| s.filter(|v| !v.is_empty()).map(str::to_string);

        Self {
            search: non_empty(search),
            location: non_empty(location).filter(|l| l != ANY_LOCATION),
            skills: skills
                .map(|raw| {
                    raw.split(',')
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query() {
        let f = JobFilter::from_query(Some(""), Some("all"), Some("React,,Go,"));
        assert_eq!(f.search, None);
        assert_eq!(f.location, None);
        assert_eq!(f.skills, vec!["React".to_string(), "Go".to_string()]);
        assert_eq!(JobFilter::from_query(None, None, None), JobFilter::default());
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let f = JobFilter::from_query(Some(" react"), Some("東京 "), Some(" Go"));
        assert_eq!(f.search.as_deref(), Some(" react"));
        assert_eq!(f.location.as_deref(), Some("東京 "));
        assert_eq!(f.skills, vec![" Go".to_string()]);
    }
}
