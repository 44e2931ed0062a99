//! Unified error types for the demo service.

use thiserror::Error;

/// Unified error type for the demo service.
///
/// There is deliberately no variant for an unset or unrecognized
/// activation selector: that is an inactive state, not a failure.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
