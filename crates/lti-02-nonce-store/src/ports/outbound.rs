//! # Outbound Ports (Driven Ports / SPI)
//!
//! Key/value cache the shared-cache backend delegates to.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::CacheError;

/// External cache with per-key absolute expiry.
///
/// `expires_at` is seconds since the Unix epoch; a key must remain visible
/// while the current time is `<= expires_at`.
#[async_trait]
pub trait SharedCache: Send + Sync {
    /// Whether a live key exists.
    async fn exists(&self, key: &str) -> Result<bool, CacheError>;

    /// Atomically stores `key` unless a live key exists.
    ///
    /// Returns `true` when this call stored the key.
    async fn insert_if_absent(
        &self,
        key: &str,
        value: &str,
        expires_at: u64,
    ) -> Result<bool, CacheError>;

    /// Stores `key`, replacing any existing value.
    async fn put(&self, key: &str, value: &str, expires_at: u64) -> Result<(), CacheError>;
}

#[async_trait]
impl<C: SharedCache + ?Sized> SharedCache for Arc<C> {
    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        (**self).exists(key).await
    }

    async fn insert_if_absent(
        &self,
        key: &str,
        value: &str,
        expires_at: u64,
    ) -> Result<bool, CacheError> {
        (**self).insert_if_absent(key, value, expires_at).await
    }

    async fn put(&self, key: &str, value: &str, expires_at: u64) -> Result<(), CacheError> {
        (**self).put(key, value, expires_at).await
    }
}
