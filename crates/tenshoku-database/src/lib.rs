//! # tenshoku-database
//!
//! In-memory data store and concrete repository implementations for all
//! TenShoku entities, plus the demo fixtures loaded at startup.

pub mod connection;
pub mod repositories;
pub mod seed;

pub use connection::DatabasePool;
