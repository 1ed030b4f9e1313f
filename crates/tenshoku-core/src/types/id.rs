//! Newtype wrappers around string identifiers for all domain records.
//!
//! Identifiers are human-readable, prefixed strings (`job-12`, `user-1`,
//! `fav-0192…`). Using distinct types prevents accidentally passing a
//! `UserId` where a `JobId` is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Prefix used for generated identifiers of this kind.
            pub const PREFIX: &'static str = $prefix;

            /// Generate a fresh, time-ordered identifier.
            pub fn generate() -> Self {
                Self(format!("{}-{}", $prefix, Uuid::now_v7().simple()))
            }

            /// Build the identifier for a sequence number, e.g. `job-3`.
            pub fn from_seq(n: u64) -> Self {
                Self(format!("{}-{}", $prefix, n))
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user.
    UserId, "user"
);

define_id!(
    /// Unique identifier for a job posting.
    JobId, "job"
);

define_id!(
    /// Unique identifier for a job application.
    ApplicationId, "app"
);

define_id!(
    /// Unique identifier for a favorite.
    FavoriteId, "fav"
);

define_id!(
    /// Unique identifier for a notification.
    NotificationId, "notif"
);

impl JobId {
    /// Numeric sequence encoded in a `job-<n>` identifier, if any.
    pub fn sequence(&self) -> Option<u64> {
        self.0
            .strip_prefix(Self::PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|n| n.parse().ok())
    }
}
