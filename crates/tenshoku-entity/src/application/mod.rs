//! Job application domain entities.

pub mod model;
pub mod status;

pub use model::{CreateApplication, JobApplication};
pub use status::ApplicationStatus;
