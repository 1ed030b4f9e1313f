//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
///
/// A value of `0` disables the corresponding timeout, so by default a
/// session lives until logout or process restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle timeout in minutes.
    #[serde(default)]
    pub idle_timeout_minutes: u64,
    /// Absolute session timeout in hours (regardless of activity).
    #[serde(default)]
    pub absolute_timeout_hours: u64,
    /// Upper bound on live sessions held in memory.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_minutes: 0,
            absolute_timeout_hours: 0,
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_max_sessions() -> u64 {
    100_000
}
