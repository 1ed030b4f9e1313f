//! Request context carrying the authenticated user.

use tenshoku_core::types::UserId;

/// Context for the current authenticated request.
///
/// Built by the HTTP layer once the bearer token resolves to a session and
/// passed into service methods, so every operation knows *who* is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
