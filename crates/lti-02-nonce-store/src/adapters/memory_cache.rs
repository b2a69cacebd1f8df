//! In-process `SharedCache` for tests and single-node development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{Clock, SystemClock};

use crate::domain::entities::is_live;
use crate::domain::errors::CacheError;
use crate::ports::outbound::SharedCache;

/// `HashMap`-backed cache honouring absolute expiry against an injected clock.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (String, u64)>>,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock: Arc::new(SystemClock),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Stored value for a live key.
    pub fn get(&self, key: &str) -> Option<String> {
        let now = self.clock.now_secs();
        self.entries
            .lock()
            .get(key)
            .filter(|(_, expires_at)| is_live(*expires_at, now))
            .map(|(value, _)| value.clone())
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SharedCache for MemoryCache {
    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key).is_some())
    }

    async fn insert_if_absent(
        &self,
        key: &str,
        value: &str,
        expires_at: u64,
    ) -> Result<bool, CacheError> {
        let now = self.clock.now_secs();
        let mut entries = self.entries.lock();
        if let Some((_, existing)) = entries.get(key) {
            if is_live(*existing, now) {
                return Ok(false);
            }
        }
        entries.insert(key.to_string(), (value.to_string(), expires_at));
        Ok(true)
    }

    async fn put(&self, key: &str, value: &str, expires_at: u64) -> Result<(), CacheError> {
        self.entries
            .lock()
            .insert(key.to_string(), (value.to_string(), expires_at));
        Ok(())
    }
}
