//! Unified error handling for the storefront.
//!
//! Provides a unified `AppError` that session operations return. Chat
//! failures never reach this type: the session degrades them to a canned
//! apology reply instead.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Persistence operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Configuration loading failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
