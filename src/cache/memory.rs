/// In-process cache backend
use crate::{
    cache::{BinCache, CacheEntry, DEFAULT_TTL_SECS},
    card::Bin,
    error::BotResult,
    metrics,
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

const CACHE_TYPE: &str = "bin";

/// HashMap-backed cache living for the lifetime of the process
#[derive(Clone)]
pub struct MemoryBinCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl MemoryBinCache {
    /// Create a cache with the default 24 hour TTL
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::seconds(DEFAULT_TTL_SECS),
        }
    }

    /// Set a custom TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for MemoryBinCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BinCache for MemoryBinCache {
    async fn get(&self, bin: &Bin) -> BotResult<Option<CacheEntry>> {
        let now = Utc::now();

        {
            let entries = self.entries.read().await;
            match entries.get(bin.as_str()) {
                Some(entry) if entry.is_fresh(self.ttl, now) => {
                    metrics::record_cache_access(CACHE_TYPE, true);
                    return Ok(Some(entry.clone()));
                }
                Some(_) => {}
                None => {
                    metrics::record_cache_access(CACHE_TYPE, false);
                    return Ok(None);
                }
            }
        }

        // Cache expired, delete it
        let mut entries = self.entries.write().await;
        if entries
            .get(bin.as_str())
            .is_some_and(|entry| !entry.is_fresh(self.ttl, now))
        {
            entries.remove(bin.as_str());
            debug!(bin = %bin, "evicted expired cache entry");
        }
        metrics::set_cache_size(entries.len());
        metrics::record_cache_access(CACHE_TYPE, false);

        Ok(None)
    }

    async fn put(&self, entry: CacheEntry) -> BotResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(entry.bin.as_str().to_string(), entry);
        metrics::set_cache_size(entries.len());
        Ok(())
    }

    async fn invalidate(&self, bin: &Bin) -> BotResult<()> {
        let mut entries = self.entries.write().await;
        entries.remove(bin.as_str());
        metrics::set_cache_size(entries.len());
        Ok(())
    }

    async fn cleanup_expired(&self) -> BotResult<u64> {
        let now = Utc::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.is_fresh(self.ttl, now));
        metrics::set_cache_size(entries.len());
        Ok((before - entries.len()) as u64)
    }

    async fn entry_count(&self) -> BotResult<usize> {
        Ok(self.entries.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardInfo;

    fn entry(bin: &str, age: Duration) -> CacheEntry {
        let mut entry = CacheEntry::new(
            Bin::parse(bin).unwrap(),
            CardInfo {
                scheme: Some("visa".to_string()),
                ..Default::default()
            },
        );
        entry.stored_at = Utc::now() - age;
        entry
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let cache = MemoryBinCache::new();
        cache.put(entry("457173", Duration::zero())).await.unwrap();

        let bin = Bin::parse("457173").unwrap();
        let cached = cache.get(&bin).await.unwrap();
        assert_eq!(cached.unwrap().data.scheme(), Some("visa"));
    }

    #[tokio::test]
    async fn test_expired_entry_is_absent_and_evicted() {
        let cache = MemoryBinCache::new().with_ttl(Duration::hours(1));
        cache.put(entry("457173", Duration::hours(2))).await.unwrap();

        let bin = Bin::parse("457173").unwrap();
        assert!(cache.get(&bin).await.unwrap().is_none());
        assert_eq!(cache.entry_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let cache = MemoryBinCache::new();
        cache.put(entry("457173", Duration::hours(3))).await.unwrap();

        let mut fresh = entry("457173", Duration::zero());
        fresh.data.scheme = Some("mastercard".to_string());
        cache.put(fresh).await.unwrap();

        let bin = Bin::parse("457173").unwrap();
        let cached = cache.get(&bin).await.unwrap().unwrap();
        assert_eq!(cached.data.scheme(), Some("mastercard"));
        assert_eq!(cache.entry_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let cache = MemoryBinCache::new().with_ttl(Duration::hours(24));
        cache.put(entry("111111", Duration::hours(25))).await.unwrap();
        cache.put(entry("222222", Duration::hours(30))).await.unwrap();
        cache.put(entry("333333", Duration::hours(1))).await.unwrap();

        let removed = cache.cleanup_expired().await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(cache.entry_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_invalidate() {
        let cache = MemoryBinCache::new();
        cache.put(entry("457173", Duration::zero())).await.unwrap();

        let bin = Bin::parse("457173").unwrap();
        cache.invalidate(&bin).await.unwrap();
        assert!(cache.get(&bin).await.unwrap().is_none());
    }
}
