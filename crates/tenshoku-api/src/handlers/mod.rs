//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod favorite;
pub mod health;
pub mod job;
pub mod notification;
pub mod user;
