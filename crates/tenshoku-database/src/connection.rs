//! Shared in-memory data store.
//!
//! Every repository holds a clone of [`DatabasePool`]; clones share the same
//! tables. Keyed records live in a [`DashMap`], ordered collections behind a
//! [`tokio::sync::RwLock`] so that check-then-write sequences can run under a
//! single write guard.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::RwLock;
use tracing::info;

use tenshoku_core::types::UserId;
use tenshoku_entity::application::JobApplication;
use tenshoku_entity::favorite::Favorite;
use tenshoku_entity::job::Job;
use tenshoku_entity::notification::Notification;
use tenshoku_entity::user::User;

/// The tables backing the store.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) users: DashMap<UserId, User>,
    pub(crate) jobs: RwLock<Vec<Job>>,
    pub(crate) applications: RwLock<Vec<JobApplication>>,
    pub(crate) favorites: RwLock<Vec<Favorite>>,
    pub(crate) notifications: RwLock<Vec<Notification>>,
}

/// Number of records held in each table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Registered users.
    pub users: usize,
    /// Job postings.
    pub jobs: usize,
    /// Submitted applications.
    pub applications: usize,
    /// Favorites across all users.
    pub favorites: usize,
    /// Notifications across all users.
    pub notifications: usize,
}

/// Handle to the process-wide in-memory store.
#[derive(Debug, Clone, Default)]
pub struct DatabasePool {
    tables: Arc<Tables>,
}

impl DatabasePool {
    /// Create an empty store.
    pub fn in_memory() -> Self {
        info!("Initialised in-memory data store");
        Self::default()
    }

    pub(crate) fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Row counts per table.
    pub async fn stats(&self) -> PoolStats {
        PoolStats {
            users: self.tables.users.len(),
            jobs: self.tables.jobs.read().await.len(),
            applications: self.tables.applications.read().await.len(),
            favorites: self.tables.favorites.read().await.len(),
            notifications: self.tables.notifications.read().await.len(),
        }
    }
}
