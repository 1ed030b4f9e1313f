//! Session lifecycle.

pub mod store;

pub use store::SessionStore;
