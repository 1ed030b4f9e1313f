//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenshoku_core::types::UserId;

/// An authenticated session, keyed by its opaque bearer token.
///
/// Sessions are created on login and destroyed on logout or expiry. They
/// live in memory only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The bearer token presented by the client.
    #[serde(skip_serializing, default)]
    pub token: String,
    /// The user this session belongs to.
    pub user_id: UserId,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Start a new session for `user_id`.
    pub fn new(token: String, user_id: UserId) -> Self {
        Self {
            token,
            user_id,
            created_at: Utc::now(),
        }
    }
}
