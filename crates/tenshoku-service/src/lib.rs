//! # tenshoku-service
//!
//! Business logic service layer for TenShoku. Each service orchestrates
//! repositories and authentication primitives to implement one group of
//! use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod favorite;
pub mod job;
pub mod notification;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthService;
pub use context::RequestContext;
pub use favorite::FavoriteService;
pub use job::{ApplicationService, JobService};
pub use notification::NotificationService;
pub use user::UserService;
