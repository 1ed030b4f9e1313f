//! # tenshoku-auth
//!
//! Authentication building blocks for the TenShoku API.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `token`: opaque bearer token generation
//! - `session`: in-memory session store keyed by bearer token

pub mod password;
pub mod session;
pub mod token;

pub use password::PasswordHasher;
pub use session::SessionStore;
pub use token::TokenGenerator;
