//! # tenshoku-core
//!
//! Core crate for the TenShoku job-matching API. Contains configuration
//! schemas, typed identifiers, pagination/sorting/filter types for job
//! search, and the unified error system.
//!
//! This crate has **no** internal dependencies on other TenShoku crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
