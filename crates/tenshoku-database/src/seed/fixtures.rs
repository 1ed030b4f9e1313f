//! The demo account and its notification feed.

use chrono::{DateTime, Duration, TimeZone, Utc};

use tenshoku_core::types::{NotificationId, UserId};
use tenshoku_entity::notification::{Notification, NotificationType};
use tenshoku_entity::user::User;

/// Login email of the demo account.
pub const DEMO_EMAIL: &str = "test@example.com";

/// Plain-text password of the demo account.
pub const DEMO_PASSWORD: &str = "password";

/// The demo job seeker.
pub fn demo_user(password_hash: String) -> User {
    User {
        id: UserId::from_seq(1),
        email: DEMO_EMAIL.to_string(),
        password_hash,
        name: "山田 太郎".to_string(),
        phone: "090-1234-5678".to_string(),
        address: "東京都渋谷区神南1-2-3 テックビル501".to_string(),
        created_at: account_created_at(),
    }
}

fn account_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Five notifications for `user_id`, timed relative to now.
pub fn demo_notifications(user_id: &UserId) -> Vec<Notification> {
    let now = Utc::now();
    let entry = |seq: u64,
                 kind: NotificationType,
                 title: &str,
                 message: &str,
                 link: &str,
                 is_read: bool,
                 age: Duration| Notification {
        id: NotificationId::from_seq(seq),
        user_id: user_id.clone(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        link: Some(link.to_string()),
        is_read,
        created_at: now - age,
    };

    vec![
        entry(
            1,
            NotificationType::ApplicationViewed,
            "応募書類が確認されました",
            "株式会社テックイノベーションがあなたの応募書類を確認しました。",
            "/mypage",
            false,
            Duration::minutes(30),
        ),
        entry(
            2,
            NotificationType::Scout,
            "新しいスカウトが届きました",
            "グローバルソフト株式会社からスカウトメッセージが届いています。",
            "/mypage",
            false,
            Duration::hours(2),
        ),
        entry(
            3,
            NotificationType::NewJob,
            "おすすめ求人があります",
            "あなたのスキルにマッチした新着求人が5件あります。",
            "/jobs",
            false,
            Duration::hours(5),
        ),
        entry(
            4,
            NotificationType::ApplicationStatus,
            "選考が進みました",
            "フューチャーテック株式会社の選考が次のステップに進みました。",
            "/mypage",
            true,
            Duration::days(1),
        ),
        entry(
            5,
            NotificationType::System,
            "プロフィールを更新しましょう",
            "プロフィールを充実させると、スカウトが届きやすくなります。",
            "/mypage",
            true,
            Duration::days(2),
        ),
    ]
}
