//! Repository implementations for all TenShoku entities.

pub mod application;
pub mod favorite;
pub mod job;
pub mod notification;
pub mod user;

pub use application::ApplicationRepository;
pub use favorite::FavoriteRepository;
pub use job::JobRepository;
pub use notification::NotificationRepository;
pub use user::UserRepository;
