//! Convenience result type alias for VividVerse credentials.

use crate::error::AppError;

/// A specialized `Result` type for credential operations.
///
/// Only platform failures travel through this type. Weak passwords and
/// wrong passwords are returned as data.
pub type AppResult<T> = Result<T, AppError>;
