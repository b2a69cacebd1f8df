//! # Nonce Entities
//!
//! Records, verdicts and the staleness rule shared by every backend.

use serde::{Deserialize, Serialize};

use super::errors::NonceError;

/// Default validity window in seconds.
pub const DEFAULT_WINDOW_SECS: u64 = 300;

/// Result of a nonce check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NonceVerdict {
    /// First use inside the window; now recorded.
    Accepted,
    /// Already recorded.
    AlreadySeen,
    /// Timestamp older than the window.
    Expired,
}

impl NonceVerdict {
    /// True only for `Accepted`.
    pub fn is_accepted(self) -> bool {
        matches!(self, NonceVerdict::Accepted)
    }
}

/// A consumed nonce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceRecord {
    pub nonce: String,
    /// Seconds since the Unix epoch, as sent by the consumer.
    pub timestamp: u64,
    /// `timestamp + window`.
    pub expires_at: u64,
}

impl NonceRecord {
    /// Validates raw input and builds the record a backend would store.
    ///
    /// # Errors
    /// `InvalidParameters` for an empty nonce or a timestamp that is not an
    /// unsigned integer.
    pub fn parse(nonce: &str, timestamp: &str, window_secs: u64) -> Result<Self, NonceError> {
        if nonce.is_empty() {
            return Err(NonceError::InvalidParameters("nonce is empty".into()));
        }
        if timestamp.is_empty() {
            return Err(NonceError::InvalidParameters("timestamp is empty".into()));
        }
        let timestamp: u64 = timestamp.parse().map_err(|_| {
            NonceError::InvalidParameters(format!("timestamp is not an integer: {timestamp}"))
        })?;

        Ok(Self {
            nonce: nonce.to_string(),
            timestamp,
            expires_at: timestamp.saturating_add(window_secs),
        })
    }

    /// Older than the window at `now`. Future timestamps are never stale.
    pub fn is_stale(&self, now: u64, window_secs: u64) -> bool {
        now.saturating_sub(self.timestamp) > window_secs
    }

    /// Still blocks reuse at `now`.
    pub fn is_live(&self, now: u64) -> bool {
        is_live(self.expires_at, now)
    }
}

/// A record expiring at `expires_at` still blocks reuse at `now`.
pub fn is_live(expires_at: u64, now: u64) -> bool {
    now <= expires_at
}
