//! # Shared-Cache Nonce Store
//!
//! One cache key per nonce, value = timestamp, expiring at
//! `timestamp + window`. Key existence is the "seen" signal; no local state
//! is kept, so several provider instances can share one cache.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{Clock, SystemClock};
use tracing::debug;

use crate::domain::entities::{NonceRecord, NonceVerdict, DEFAULT_WINDOW_SECS};
use crate::domain::errors::NonceError;
use crate::ports::inbound::NonceStore;
use crate::ports::outbound::SharedCache;

/// `NonceStore` over an external cache.
pub struct SharedCacheNonceStore<C: SharedCache> {
    cache: C,
    key_prefix: String,
    window_secs: u64,
    clock: Arc<dyn Clock>,
}

impl<C: SharedCache> SharedCacheNonceStore<C> {
    pub fn new(cache: C) -> Self {
        Self {
            cache,
            key_prefix: String::new(),
            window_secs: DEFAULT_WINDOW_SECS,
            clock: Arc::new(SystemClock),
        }
    }

    /// Namespaces every key, e.g. `"lti:nonce:"`.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_window(mut self, window_secs: u64) -> Self {
        self.window_secs = window_secs;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    fn key(&self, nonce: &str) -> String {
        format!("{}{}", self.key_prefix, nonce)
    }
}

#[async_trait]
impl<C: SharedCache> NonceStore for SharedCacheNonceStore<C> {
    async fn is_new(&self, nonce: &str, timestamp: &str) -> Result<NonceVerdict, NonceError> {
        let record = NonceRecord::parse(nonce, timestamp, self.window_secs)?;
        let now = self.clock.now_secs();
        let key = self.key(&record.nonce);

        let verdict = if record.is_stale(now, self.window_secs) {
            // A stale nonce is never recorded; report a prior use first.
            if self.cache.exists(&key).await? {
                NonceVerdict::AlreadySeen
            } else {
                NonceVerdict::Expired
            }
        } else if self
            .cache
            .insert_if_absent(&key, timestamp, record.expires_at)
            .await?
        {
            NonceVerdict::Accepted
        } else {
            NonceVerdict::AlreadySeen
        };

        debug!(nonce = %record.nonce, timestamp = record.timestamp, ?verdict, "Nonce checked");
        Ok(verdict)
    }

    async fn set_used(&self, nonce: &str, timestamp: &str) -> Result<(), NonceError> {
        let record = NonceRecord::parse(nonce, timestamp, self.window_secs)?;
        self.cache
            .put(&self.key(&record.nonce), timestamp, record.expires_at)
            .await?;
        Ok(())
    }
}
