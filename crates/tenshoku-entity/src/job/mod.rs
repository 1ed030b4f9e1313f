//! Job posting domain entities.

pub mod employment;
pub mod model;

pub use employment::EmploymentType;
pub use model::Job;
