//! Convenience result type alias for Hookline.

use crate::error::AppError;

/// A specialized `Result` type for hook pipeline operations.
pub type AppResult<T> = Result<T, AppError>;
