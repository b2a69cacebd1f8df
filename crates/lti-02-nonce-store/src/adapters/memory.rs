//! # In-Process Nonce Store
//!
//! A `nonce -> expires_at` table behind one mutex. Expired entries are purged
//! lazily on every lookup; there is no background timer.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{Clock, SystemClock};
use tracing::debug;

use crate::domain::entities::{is_live, NonceRecord, NonceVerdict, DEFAULT_WINDOW_SECS};
use crate::domain::errors::NonceError;
use crate::ports::inbound::NonceStore;

/// Nonce store for a single process.
pub struct MemoryNonceStore {
    used: Mutex<HashMap<String, u64>>,
    window_secs: u64,
    clock: Arc<dyn Clock>,
}

impl MemoryNonceStore {
    /// Empty store with the default window and the system clock.
    pub fn new() -> Self {
        Self {
            used: Mutex::new(HashMap::new()),
            window_secs: DEFAULT_WINDOW_SECS,
            clock: Arc::new(SystemClock),
        }
    }

    /// Overrides the validity window.
    #[must_use]
    pub fn with_window(mut self, window_secs: u64) -> Self {
        self.window_secs = window_secs;
        self
    }

    /// Overrides the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn window_secs(&self) -> u64 {
        self.window_secs
    }

    /// Number of recorded nonces, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.used.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.lock().is_empty()
    }

    /// Drops every expired record now. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_secs();
        let mut used = self.used.lock();
        let before = used.len();
        used.retain(|_, expires_at| is_live(*expires_at, now));
        before - used.len()
    }
}

impl Default for MemoryNonceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryNonceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryNonceStore")
            .field("window_secs", &self.window_secs)
            .field("entries", &self.len())
            .finish()
    }
}

#[async_trait]
impl NonceStore for MemoryNonceStore {
    async fn is_new(&self, nonce: &str, timestamp: &str) -> Result<NonceVerdict, NonceError> {
        let record = NonceRecord::parse(nonce, timestamp, self.window_secs)?;
        let now = self.clock.now_secs();

        let verdict = {
            let mut used = self.used.lock();
            used.retain(|_, expires_at| is_live(*expires_at, now));

            if used.contains_key(&record.nonce) {
                NonceVerdict::AlreadySeen
            } else if record.is_stale(now, self.window_secs) {
                NonceVerdict::Expired
            } else {
                used.insert(record.nonce.clone(), record.expires_at);
                NonceVerdict::Accepted
            }
        };

        debug!(nonce = %record.nonce, timestamp = record.timestamp, ?verdict, "Nonce checked");
        Ok(verdict)
    }

    async fn set_used(&self, nonce: &str, timestamp: &str) -> Result<(), NonceError> {
        let record = NonceRecord::parse(nonce, timestamp, self.window_secs)?;
        self.used.lock().insert(record.nonce, record.expires_at);
        Ok(())
    }
}
