use thiserror::Error;

/// Errors from nonce store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NonceError {
    /// Empty nonce, or a timestamp that is empty or not an integer.
    #[error("invalid nonce parameters: {0}")]
    InvalidParameters(String),

    /// The backing cache failed.
    #[error("nonce store backend error: {0}")]
    Backend(String),
}

/// Failure reported by a `SharedCache` adapter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("shared cache error: {message}")]
pub struct CacheError {
    message: String,
}

impl CacheError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<CacheError> for NonceError {
    fn from(err: CacheError) -> Self {
        NonceError::Backend(err.message)
    }
}
