//! Notification type enumeration.

use serde::{Deserialize, Serialize};

/// What triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// An employer opened the user's application.
    ApplicationViewed,
    /// An application moved to another selection stage.
    ApplicationStatus,
    /// New postings match the user's profile.
    NewJob,
    /// A company sent a scout message.
    Scout,
    /// Service announcements.
    System,
}

impl NotificationType {
    /// Return the type as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApplicationViewed => "application_viewed",
            Self::ApplicationStatus => "application_status",
            Self::NewJob => "new_job",
            Self::Scout => "scout",
            Self::System => "system",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
