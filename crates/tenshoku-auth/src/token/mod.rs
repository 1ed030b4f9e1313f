//! Bearer token generation.

pub mod generator;

pub use generator::TokenGenerator;
