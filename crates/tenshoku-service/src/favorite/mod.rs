//! Job bookmarks.

pub mod service;

pub use service::{FAVORITE_NOT_FOUND, FavoriteService};
