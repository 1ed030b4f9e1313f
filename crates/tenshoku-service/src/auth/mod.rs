//! Login, logout, and token resolution.

pub mod service;

pub use service::{AUTH_REQUIRED, AuthService, LoginResult};
