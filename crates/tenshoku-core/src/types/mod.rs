//! Core type definitions used across the TenShoku workspace.

pub mod filter;
pub mod id;
pub mod pagination;
pub mod sorting;

pub use filter::JobFilter;
pub use id::*;
pub use pagination::{PageRequest, PageResponse, Pagination};
pub use sorting::JobSort;
