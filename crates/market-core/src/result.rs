//! Convenience result type alias for Seamarket.

use crate::error::AppError;

/// A specialized `Result` type for Seamarket operations.
pub type AppResult<T> = Result<T, AppError>;
