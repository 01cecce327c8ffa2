/// BIN Resolver - Orchestrates the provider fallback chain with caching
use crate::{
    cache::{BinCache, CacheEntry},
    card::{Bin, CardInfo},
    error::BotResult,
    providers::BinProvider,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Resolves BINs through an ordered list of providers
#[derive(Clone)]
pub struct BinResolver {
    cache: Arc<dyn BinCache>,
    providers: Vec<Arc<dyn BinProvider>>,
}

impl BinResolver {
    /// Create a resolver; providers are tried in the order given
    pub fn new(cache: Arc<dyn BinCache>, providers: Vec<Arc<dyn BinProvider>>) -> Self {
        Self { cache, providers }
    }

    /// Resolve a BIN to card metadata
    ///
    /// Resolution order:
    /// 1. Check cache first (fast path, no network)
    /// 2. Try each provider in priority order, stopping at the first non-empty answer
    /// 3. Cache the successful resolution
    ///
    /// `Ok(None)` means every provider came back empty. Nothing is cached in
    /// that case so the next request retries them all.
    pub async fn resolve(&self, bin: &Bin) -> BotResult<Option<CardInfo>> {
        if let Some(cached) = self.cache.get(bin).await? {
            debug!(bin = %bin, "cache hit");
            return Ok(Some(cached.data));
        }

        debug!(bin = %bin, "cache miss, querying providers");

        for provider in &self.providers {
            let Some(info) = provider.lookup(bin).await else {
                continue;
            };
            if info.is_empty() {
                continue;
            }

            debug!(bin = %bin, provider = provider.name(), "resolved");
            self.cache
                .put(CacheEntry::new(bin.clone(), info.clone()))
                .await?;
            return Ok(Some(info));
        }

        info!(bin = %bin, providers = self.providers.len(), "no provider returned data");
        Ok(None)
    }

    /// Invalidate a cached BIN (force re-resolution)
    pub async fn invalidate(&self, bin: &Bin) -> BotResult<()> {
        self.cache.invalidate(bin).await
    }

    /// Clean up expired cache entries
    pub async fn cleanup_cache(&self) -> BotResult<u64> {
        self.cache.cleanup_expired().await
    }

    /// Number of cached BINs
    pub async fn cache_size(&self) -> BotResult<usize> {
        self.cache.entry_count().await
    }

    /// Provider names in priority order
    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }
}
