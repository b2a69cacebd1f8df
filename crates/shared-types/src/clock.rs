//! # Clock
//!
//! Time source abstraction. Abstracted to allow testing staleness windows with
//! deterministic time instead of sleeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current Unix time in whole seconds.
pub trait Clock: Send + Sync {
    /// Returns the current Unix timestamp (seconds).
    fn now_secs(&self) -> u64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    /// Returns 0 if the system clock is before `UNIX_EPOCH`; never panics.
    fn now_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now_secs(&self) -> u64 {
        (**self).now_secs()
    }
}

/// Manually driven clock for deterministic tests.
///
/// Shared through an `Arc` so a test can keep a handle and move time forward
/// while a store owns another handle.
#[derive(Debug, Default)]
pub struct ManualClock {
    secs: AtomicU64,
}

impl ManualClock {
    /// Creates a clock frozen at `initial` seconds.
    pub fn new(initial: u64) -> Self {
        Self {
            secs: AtomicU64::new(initial),
        }
    }

    /// Creates a clock wrapped in `Arc` for shared ownership.
    pub fn new_shared(initial: u64) -> Arc<Self> {
        Arc::new(Self::new(initial))
    }

    /// Moves time forward by `secs`.
    pub fn advance(&self, secs: u64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }

    /// Jumps to an absolute time.
    pub fn set(&self, secs: u64) {
        self.secs.store(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> u64 {
        self.secs.load(Ordering::SeqCst)
    }
}
