//! Notification listing and read-state management.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use tenshoku_core::error::AppError;
use tenshoku_core::types::NotificationId;
use tenshoku_database::repositories::NotificationRepository;
use tenshoku_entity::notification::Notification;

use crate::context::RequestContext;

/// Message returned for an unknown (or someone else's) notification.
pub const NOTIFICATION_NOT_FOUND: &str = "通知が見つかりません";

/// The caller's feed with its unread count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeed {
    /// Notifications, newest first.
    pub notifications: Vec<Notification>,
    /// How many of them are unread.
    pub unread_count: u64,
}

/// Manages user notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Lists notifications for the current user.
    pub async fn list(&self, ctx: &RequestContext) -> Result<NotificationFeed, AppError> {
        let notifications = self.notif_repo.find_by_user(&ctx.user_id).await?;
        let unread_count = notifications.iter().filter(|n| n.is_unread()).count() as u64;
        Ok(NotificationFeed {
            notifications,
            unread_count,
        })
    }

    /// Gets the unread notification count.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.notif_repo.count_unread(&ctx.user_id).await
    }

    /// Marks one of the caller's notifications as read.
    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        id: &NotificationId,
    ) -> Result<Notification, AppError> {
        self.notif_repo
            .mark_read(id, &ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(NOTIFICATION_NOT_FOUND))
    }

    /// Marks all notifications as read for the current user.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        let marked = self.notif_repo.mark_all_read(&ctx.user_id).await?;
        info!(user_id = %ctx.user_id, marked, "Marked all notifications read");
        Ok(marked)
    }
}

#[cfg(test)]
mod tests {
    use tenshoku_core::types::UserId;

    use crate::testing::TestServices;

    use super::*;

    #[tokio::test]
    async fn test_feed_is_newest_first_with_unread_count() {
        let services = TestServices::seeded().await;
        let ctx = services.login().await;
        let feed = services.notifications.list(&ctx).await.unwrap();
        assert_eq!(feed.notifications.len(), 5);
        assert_eq!(feed.unread_count, 3);
        assert!(
            feed.notifications
                .windows(2)
                .all(|w| w[0].created_at >= w[1].created_at)
        );
    }

    #[tokio::test]
    async fn test_mark_read_is_monotonic_and_scoped() {
        let services = TestServices::seeded().await;
        let ctx = services.login().await;
        let id = NotificationId::from("notif-1");

        assert!(services.notifications.mark_read(&ctx, &id).await.unwrap().is_read);
        assert!(services.notifications.mark_read(&ctx, &id).await.unwrap().is_read);
        assert_eq!(services.notifications.unread_count(&ctx).await.unwrap(), 2);

        let stranger = RequestContext::new(UserId::from("user-2"));
        let err = services
            .notifications
            .mark_read(&stranger, &NotificationId::from("notif-2"))
            .await
            .unwrap_err();
        assert_eq!(err.message, NOTIFICATION_NOT_FOUND);
        assert_eq!(services.notifications.unread_count(&ctx).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_mark_all_read() {
        let services = TestServices::seeded().await;
        let ctx = services.login().await;
        assert_eq!(services.notifications.mark_all_read(&ctx).await.unwrap(), 3);
        assert_eq!(services.notifications.unread_count(&ctx).await.unwrap(), 0);
    }
}
