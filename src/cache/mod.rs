/// BIN result cache
///
/// The resolver owns a `BinCache` and is the only writer. Entries expire
/// after a fixed TTL and are overwritten wholesale on re-resolution; there
/// is no negative caching.

pub mod memory;

pub use memory::MemoryBinCache;

use crate::{
    card::{Bin, CardInfo},
    error::BotResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default time-to-live for resolved BINs (24 hours)
pub const DEFAULT_TTL_SECS: i64 = 24 * 60 * 60;

/// A resolved BIN and when it was stored
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheEntry {
    pub bin: Bin,
    pub data: CardInfo,
    pub stored_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(bin: Bin, data: CardInfo) -> Self {
        Self {
            bin,
            data,
            stored_at: Utc::now(),
        }
    }

    /// Still valid at `now` for the given TTL
    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.stored_at < ttl
    }
}

/// Storage backend for resolved BINs
///
/// Implementations must treat expired entries as absent.
#[async_trait]
pub trait BinCache: Send + Sync {
    /// Get a live entry
    async fn get(&self, bin: &Bin) -> BotResult<Option<CacheEntry>>;

    /// Insert or overwrite an entry
    async fn put(&self, entry: CacheEntry) -> BotResult<()>;

    /// Drop an entry, forcing re-resolution
    async fn invalidate(&self, bin: &Bin) -> BotResult<()>;

    /// Remove every expired entry, returning how many were dropped
    async fn cleanup_expired(&self) -> BotResult<u64>;

    /// Number of stored entries, expired ones included
    async fn entry_count(&self) -> BotResult<usize>;
}
