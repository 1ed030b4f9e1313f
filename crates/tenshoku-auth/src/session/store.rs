//! In-memory session store backed by a moka cache.
//!
//! Both timeouts are cache policies: the idle timeout is the cache's
//! time-to-idle and the absolute timeout its time-to-live. Lookups never
//! write, so a concurrent logout cannot be undone by a read.

use std::time::Duration;

use chrono::Utc;
use moka::future::Cache;
use tracing::info;

use tenshoku_core::config::SessionConfig;
use tenshoku_core::types::UserId;
use tenshoku_entity::session::Session;

use crate::token::TokenGenerator;

/// Stores live sessions keyed by bearer token.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Token to session map.
    cache: Cache<String, Session>,
    /// Token source.
    tokens: TokenGenerator,
}

impl SessionStore {
    /// Creates a session store from configuration. Zero disables a timeout.
    pub fn new(config: &SessionConfig, tokens: TokenGenerator) -> Self {
        let idle = (config.idle_timeout_minutes > 0)
            .then(|| Duration::from_secs(config.idle_timeout_minutes * 60));
        let absolute = (config.absolute_timeout_hours > 0)
            .then(|| Duration::from_secs(config.absolute_timeout_hours * 3600));

        Self::with_timeouts(config.max_sessions, idle, absolute, tokens)
    }

    /// Creates a session store with explicit timeouts.
    pub fn with_timeouts(
        max_sessions: u64,
        idle: Option<Duration>,
        absolute: Option<Duration>,
        tokens: TokenGenerator,
    ) -> Self {
        let mut builder = Cache::builder().max_capacity(max_sessions);
        if let Some(idle) = idle {
            builder = builder.time_to_idle(idle);
        }
        if let Some(absolute) = absolute {
            builder = builder.time_to_live(absolute);
        }

        Self {
            cache: builder.build(),
            tokens,
        }
    }

    /// Start a session for `user_id` and return it with its new token.
    pub async fn create(&self, user_id: &UserId) -> Session {
        let session = Session::new(self.tokens.generate(), user_id.clone());
        self.cache
            .insert(session.token.clone(), session.clone())
            .await;
        info!(user_id = %user_id, "Session created");
        session
    }

    /// Resolve a token to its live session.
    ///
    /// Returns `None` for unknown, idle-expired, or absolutely-expired
    /// tokens. A successful lookup counts as activity for the idle timeout.
    pub async fn get(&self, token: &str) -> Option<Session> {
        self.cache.get(token).await
    }

    /// Remove the session for `token`. Returns whether one existed.
    pub async fn remove(&self, token: &str) -> bool {
        match self.cache.remove(token).await {
            Some(session) => {
                let age_secs = (Utc::now() - session.created_at).num_seconds();
                info!(user_id = %session.user_id, age_secs, "Session removed");
                true
            }
            None => false,
        }
    }
}
