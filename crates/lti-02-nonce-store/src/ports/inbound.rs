//! # Inbound Ports (Driving Ports / API)

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::NonceVerdict;
use crate::domain::errors::NonceError;

/// Anti-replay capability used by the launch validator.
///
/// `nonce` and `timestamp` are the raw `oauth_nonce` / `oauth_timestamp`
/// strings from the request.
#[async_trait]
pub trait NonceStore: Send + Sync {
    /// Checks a nonce and, when it is new and fresh, records it.
    ///
    /// Check-and-record is atomic per store: two concurrent calls with the
    /// same nonce never both return `Accepted`.
    async fn is_new(&self, nonce: &str, timestamp: &str) -> Result<NonceVerdict, NonceError>;

    /// Records a nonce unconditionally.
    async fn set_used(&self, nonce: &str, timestamp: &str) -> Result<(), NonceError>;
}

#[async_trait]
impl<S: NonceStore + ?Sized> NonceStore for Arc<S> {
    async fn is_new(&self, nonce: &str, timestamp: &str) -> Result<NonceVerdict, NonceError> {
        (**self).is_new(nonce, timestamp).await
    }

    async fn set_used(&self, nonce: &str, timestamp: &str) -> Result<(), NonceError> {
        (**self).set_used(nonce, timestamp).await
    }
}
