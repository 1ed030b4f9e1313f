//! Notification repository implementation.

use tenshoku_core::result::AppResult;
use tenshoku_core::types::{NotificationId, UserId};
use tenshoku_entity::notification::Notification;

use crate::connection::DatabasePool;

/// Repository for user notifications.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: DatabasePool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// List notifications for a user, newest first.
    pub async fn find_by_user(&self, user_id: &UserId) -> AppResult<Vec<Notification>> {
        let notifications = self.pool.tables().notifications.read().await;
        let mut found: Vec<Notification> = notifications
            .iter()
            .filter(|n| &n.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    /// Count unread notifications for a user.
    pub async fn count_unread(&self, user_id: &UserId) -> AppResult<u64> {
        let notifications = self.pool.tables().notifications.read().await;
        Ok(notifications
            .iter()
            .filter(|n| &n.user_id == user_id && n.is_unread())
            .count() as u64)
    }

    /// Store a notification.
    pub async fn create(&self, notification: Notification) -> AppResult<Notification> {
        let mut notifications = self.pool.tables().notifications.write().await;
        notifications.push(notification.clone());
        Ok(notification)
    }

    /// Mark one of the user's notifications as read.
    ///
    /// Returns the updated notification, or `None` if the user has no
    /// notification with that id.
    pub async fn mark_read(
        &self,
        id: &NotificationId,
        user_id: &UserId,
    ) -> AppResult<Option<Notification>> {
        let mut notifications = self.pool.tables().notifications.write().await;
        Ok(notifications
            .iter_mut()
            .find(|n| &n.id == id && &n.user_id == user_id)
            .map(|n| {
                n.is_read = true;
                n.clone()
            }))
    }

    /// Mark all of a user's notifications as read. Returns how many changed.
    pub async fn mark_all_read(&self, user_id: &UserId) -> AppResult<u64> {
        let mut notifications = self.pool.tables().notifications.write().await;
        let mut marked = 0;
        for n in notifications
            .iter_mut()
            .filter(|n| &n.user_id == user_id && n.is_unread())
        {
            n.is_read = true;
            marked += 1;
        }
        Ok(marked)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use tenshoku_entity::notification::NotificationType;

    use super::*;

    fn notification(id: &str, user: &str, minutes_ago: i64, is_read: bool) -> Notification {
        Notification {
            id: NotificationId::from(id),
            user_id: UserId::from(user),
            kind: NotificationType::System,
            title: "title".into(),
            message: "message".into(),
            link: None,
            is_read,
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    async fn repo() -> NotificationRepository {
        let repo = NotificationRepository::new(DatabasePool::in_memory());
        repo.create(notification("notif-1", "user-1", 60, false))
            .await
            .unwrap();
        repo.create(notification("notif-2", "user-1", 5, false))
            .await
            .unwrap();
        repo.create(notification("notif-3", "user-2", 1, false))
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_list_is_scoped_and_newest_first() {
        let repo = repo().await;
        let list = repo.find_by_user(&UserId::from("user-1")).await.unwrap();
        let ids: Vec<&str> = list.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["notif-2", "notif-1"]);
    }

    #[tokio::test]
    async fn test_mark_read_only_touches_own_notifications() {
        let repo = repo().await;
        let user1 = UserId::from("user-1");
        let other = repo
            .mark_read(&NotificationId::from("notif-3"), &user1)
            .await
            .unwrap();
        assert!(other.is_none());

        let marked = repo
            .mark_read(&NotificationId::from("notif-1"), &user1)
            .await
            .unwrap()
            .unwrap();
        assert!(marked.is_read);
        assert_eq!(repo.count_unread(&user1).await.unwrap(), 1);
        assert_eq!(repo.count_unread(&UserId::from("user-2")).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_mark_all_read_counts_changes() {
        let repo = repo().await;
        let user1 = UserId::from("user-1");
        assert_eq!(repo.mark_all_read(&user1).await.unwrap(), 2);
        assert_eq!(repo.mark_all_read(&user1).await.unwrap(), 0);
        assert_eq!(repo.count_unread(&user1).await.unwrap(), 0);
    }
}
