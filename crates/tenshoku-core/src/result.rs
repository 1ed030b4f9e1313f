//! Convenience result type alias for TenShoku.

use crate::error::AppError;

/// A specialized `Result` type for TenShoku operations.
pub type AppResult<T> = Result<T, AppError>;
