//! Notification feed.

pub mod service;

pub use service::{NOTIFICATION_NOT_FOUND, NotificationFeed, NotificationService};
