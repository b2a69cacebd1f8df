//! # Nonce Store (LTI-02)
//!
//! Remembers which `oauth_nonce` values have been consumed so a signed launch
//! cannot be replayed inside its validity window.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): records, verdicts, staleness rule
//! - **Ports Layer** (`ports/`): `NonceStore` (driving) and `SharedCache`
//!   (driven, for external key/value caches)
//! - **Adapters Layer** (`adapters/`): `MemoryNonceStore`,
//!   `SharedCacheNonceStore`, `MemoryCache` and, behind the `redis` feature,
//!   `RedisCache`
//!
//! ## Contract
//!
//! `is_new(nonce, timestamp)`:
//!
//! 1. Malformed input is an error, never a silent rejection.
//! 2. A nonce already recorded is `AlreadySeen`.
//! 3. A timestamp older than the window is `Expired`.
//! 4. Otherwise the nonce is recorded and `Accepted`.
//!
//! Every backend records `expires_at = timestamp + window` and treats a record
//! as live while `now <= expires_at`, so verdicts are identical across
//! backends for the same call sequence and clock.

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-export public API
pub use adapters::memory::MemoryNonceStore;
pub use adapters::memory_cache::MemoryCache;
#[cfg(feature = "redis")]
pub use adapters::redis::RedisCache;
pub use adapters::shared_cache::SharedCacheNonceStore;
pub use domain::entities::{NonceRecord, NonceVerdict, DEFAULT_WINDOW_SECS};
pub use domain::errors::{CacheError, NonceError};
pub use ports::inbound::NonceStore;
pub use ports::outbound::SharedCache;
