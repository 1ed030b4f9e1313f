//! User self-service operations.

pub mod service;

pub use service::{USER_NOT_FOUND, UserService};
