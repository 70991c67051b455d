//! Error types used across the Shepherd adapter.

use thiserror::Error;

/// Result type for Shepherd operations.
pub type ShepherdResult<T> = Result<T, ShepherdError>;

#[derive(Debug, Error)]
pub enum ShepherdError {
    /// The cluster tool could not be spawned or exited nonzero.
    #[error("cluster tool invocation failed: {0}")]
    Invocation(String),

    /// Captured output did not match the expected grammar.
    #[error("unexpected tool output: {0}")]
    Format(String),

    /// Growing a parsed collection failed.
    #[error("allocation failed: {0}")]
    Allocation(String),

    /// The caller requested a capability this backend does not offer.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Malformed pool definition or configuration.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

// Implement From for common error types to enable `?` operator
impl From<std::io::Error> for ShepherdError {
    fn from(err: std::io::Error) -> Self {
        ShepherdError::Internal(format!("I/O error: {}", err))
    }
}

impl From<String> for ShepherdError {
    fn from(err: String) -> Self {
        ShepherdError::Internal(err)
    }
}

impl From<&str> for ShepherdError {
    fn from(err: &str) -> Self {
        ShepherdError::Internal(err.to_string())
    }
}
