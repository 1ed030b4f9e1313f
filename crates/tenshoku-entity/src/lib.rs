//! # tenshoku-entity
//!
//! Domain entity models for TenShoku. Every struct in this crate is a
//! record held by the in-memory store or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`, and
//! serialize with camelCase field names as the web client expects.

pub mod application;
pub mod favorite;
pub mod job;
pub mod notification;
pub mod session;
pub mod user;
