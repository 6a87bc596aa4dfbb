//! Convenience result type alias for Command Tree.

use crate::error::AppError;

/// A specialized `Result` type for Command Tree operations.
pub type AppResult<T> = Result<T, AppError>;
