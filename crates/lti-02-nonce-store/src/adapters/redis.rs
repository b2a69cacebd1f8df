//! # Redis Cache Adapter
//!
//! `SharedCache` over Redis. Check-and-mark is a single
//! `SET key value NX EXAT t` round trip, so any number of provider instances
//! can share the server. Requires Redis 6.2 or newer for `EXAT`.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{Client, RedisError};
use tracing::info;

use crate::domain::errors::CacheError;
use crate::ports::outbound::SharedCache;

fn cache_error(err: RedisError) -> CacheError {
    CacheError::new(err.to_string())
}

/// Redis-backed cache using a reconnecting multiplexed connection.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    /// Connects to `url` (e.g. `redis://127.0.0.1:6379/0`).
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let client = Client::open(url).map_err(cache_error)?;
        let conn = ConnectionManager::new(client).await.map_err(cache_error)?;
        info!("Connected nonce cache to redis");
        Ok(Self { conn })
    }

    /// Wraps an existing connection manager.
    pub fn from_connection(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

// Redis evicts a key once the clock reaches its EXAT; the key must stay
// visible through the whole `expires_at` second.
fn redis_expiry(expires_at: u64) -> u64 {
    expires_at.saturating_add(1)
}

#[async_trait]
impl SharedCache for RedisCache {
    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.conn.clone();
        redis::cmd("EXISTS")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(cache_error)
    }

    async fn insert_if_absent(
        &self,
        key: &str,
        value: &str,
        expires_at: u64,
    ) -> Result<bool, CacheError> {
        let mut conn = self.conn.clone();
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("NX")
            .arg("EXAT")
            .arg(redis_expiry(expires_at))
            .query_async(&mut conn)
            .await
            .map_err(cache_error)?;
        Ok(reply.is_some())
    }

    async fn put(&self, key: &str, value: &str, expires_at: u64) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: () = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EXAT")
            .arg(redis_expiry(expires_at))
            .query_async(&mut conn)
            .await
            .map_err(cache_error)?;
        Ok(())
    }
}
