//! User repository implementation.

use tenshoku_core::result::AppResult;
use tenshoku_core::types::UserId;
use tenshoku_entity::user::{UpdateProfile, User};

use crate::connection::DatabasePool;

/// Repository for user lookup and profile updates.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: DatabasePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.pool.tables().users.get(id).map(|u| u.value().clone()))
    }

    /// Find a user by exact email address.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .pool
            .tables()
            .users
            .iter()
            .find(|entry| entry.email == email)
            .map(|entry| entry.value().clone()))
    }

    /// Insert or replace a user record.
    pub async fn upsert(&self, user: User) -> AppResult<()> {
        self.pool.tables().users.insert(user.id.clone(), user);
        Ok(())
    }

    /// Apply a profile update and return the updated user, or `None` if
    /// the user does not exist.
    pub async fn update_profile(
        &self,
        id: &UserId,
        update: UpdateProfile,
    ) -> AppResult<Option<User>> {
        Ok(self.pool.tables().users.get_mut(id).map(|mut entry| {
            entry.apply(update);
            entry.value().clone()
        }))
    }
}
