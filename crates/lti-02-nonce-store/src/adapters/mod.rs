//! # Adapters
//!
//! - `memory`: single-process `NonceStore`
//! - `shared_cache`: `NonceStore` over any `SharedCache`
//! - `memory_cache`: in-process `SharedCache`
//! - `redis`: Redis `SharedCache` (feature `redis`)

pub mod memory;
pub mod memory_cache;
#[cfg(feature = "redis")]
pub mod redis;
pub mod shared_cache;
