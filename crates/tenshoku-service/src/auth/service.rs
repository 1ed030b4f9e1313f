//! Authentication service: credential checks and session lifecycle.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use tenshoku_auth::{PasswordHasher, SessionStore};
use tenshoku_core::error::AppError;
use tenshoku_database::repositories::UserRepository;
use tenshoku_entity::user::User;

use crate::context::RequestContext;

/// Message returned when a request lacks a valid session.
pub const AUTH_REQUIRED: &str = "認証が必要です";

/// Message returned for a wrong email or password.
pub const INVALID_CREDENTIALS: &str = "メールアドレスまたはパスワードが正しくありません";

/// Outcome of a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}

/// Handles login, logout, and bearer token resolution.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Live sessions.
    sessions: Arc<SessionStore>,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            sessions,
        }
    }

    /// Verify credentials and open a session.
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            warn!(email = %email, "Login failed: unknown email");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let session = self.sessions.create(&user.id).await;
        info!(user_id = %user.id, "User logged in");

        Ok(LoginResult {
            token: session.token,
            user,
        })
    }

    /// End the session for `token`, if any. Logging out twice is harmless.
    pub async fn logout(&self, token: Option<&str>) -> bool {
        match token {
            Some(token) => self.sessions.remove(token).await,
            None => false,
        }
    }

    /// Resolve a bearer token into a request context.
    pub async fn authenticate(&self, token: &str) -> Result<RequestContext, AppError> {
        self.sessions
            .get(token)
            .await
            .map(|session| RequestContext::new(session.user_id))
            .ok_or_else(|| AppError::authentication(AUTH_REQUIRED))
    }
}

#[cfg(test)]
mod tests {
    use tenshoku_core::error::ErrorKind;

    use crate::testing::TestServices;

    use super::*;

    #[tokio::test]
    async fn test_login_returns_token_and_user() {
        let services = TestServices::seeded().await;
        let result = services
            .auth
            .login("test@example.com", "password")
            .await
            .unwrap();
        assert!(!result.token.is_empty());
        assert_eq!(result.user.id.as_str(), "user-1");

        let ctx = services.auth.authenticate(&result.token).await.unwrap();
        assert_eq!(ctx.user_id.as_str(), "user-1");
    }

    #[tokio::test]
    async fn test_bad_credentials_are_indistinguishable() {
        let services = TestServices::seeded().await;
        let wrong_password = services
            .auth
            .login("test@example.com", "nope")
            .await
            .unwrap_err();
        let unknown_email = services
            .auth
            .login("who@example.com", "password")
            .await
            .unwrap_err();
        assert_eq!(wrong_password.kind, ErrorKind::Authentication);
        assert_eq!(wrong_password.message, unknown_email.message);
        assert_eq!(wrong_password.message, INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn test_logout_invalidates_token() {
        let services = TestServices::seeded().await;
        let token = services
            .auth
            .login("test@example.com", "password")
            .await
            .unwrap()
            .token;
        assert!(services.auth.logout(Some(&token)).await);
        let err = services.auth.authenticate(&token).await.unwrap_err();
        assert_eq!(err.message, AUTH_REQUIRED);
        assert!(!services.auth.logout(Some(&token)).await);
        assert!(!services.auth.logout(None).await);
    }
}
