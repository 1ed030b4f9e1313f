//! Job search and applications.

pub mod application;
pub mod service;

pub use application::{ApplicationService, ApplyRequest};
pub use service::{JOB_NOT_FOUND, JobSearch, JobService};
