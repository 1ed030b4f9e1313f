//! User self-service operations: profile viewing and editing.

use std::sync::Arc;

use tracing::info;

use tenshoku_core::error::AppError;
use tenshoku_database::repositories::UserRepository;
use tenshoku_entity::user::{UpdateProfile, User};

use crate::context::RequestContext;

/// Message returned when the session's user no longer exists.
pub const USER_NOT_FOUND: &str = "ユーザーが見つかりません";

/// Handles user self-service operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Gets the current user's profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(&ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }

    /// Overwrites the provided profile fields and returns the updated user.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        update: UpdateProfile,
    ) -> Result<User, AppError> {
        let user = self
            .user_repo
            .update_profile(&ctx.user_id, update)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use tenshoku_core::error::ErrorKind;
    use tenshoku_core::types::UserId;

    use crate::testing::TestServices;

    use super::*;

    #[tokio::test]
    async fn test_update_persists() {
        let services = TestServices::seeded().await;
        let ctx = services.login().await;

        let updated = services
            .users
            .update_profile(
                &ctx,
                UpdateProfile {
                    address: Some("大阪府大阪市".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.address, "大阪府大阪市");

        let reloaded = services.users.get_profile(&ctx).await.unwrap();
        assert_eq!(reloaded.address, "大阪府大阪市");
        assert_eq!(reloaded.name, "山田 太郎");
    }

    #[tokio::test]
    async fn test_vanished_user_is_not_found() {
        let services = TestServices::seeded().await;
        let ctx = RequestContext::new(UserId::from("user-404"));
        let err = services.users.get_profile(&ctx).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, USER_NOT_FOUND);
    }
}
