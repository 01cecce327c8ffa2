use crate::{context::AppContext, metrics};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, error, info};

pub mod tasks;

/// Interval between uptime gauge refreshes
const UPTIME_INTERVAL: Duration = Duration::from_secs(60);

/// Job scheduler for background tasks
pub struct JobScheduler {
    context: Arc<AppContext>,
}

impl JobScheduler {
    pub fn new(context: Arc<AppContext>) -> Self {
        Self { context }
    }

    /// Start all background jobs; each stops once `shutdown` flips to true
    pub fn start(self: Arc<Self>, shutdown: watch::Receiver<bool>) -> Vec<JoinHandle<()>> {
        info!("Starting background job scheduler");

        let handles = vec![
            tokio::spawn(Self::cache_sweep_job(Arc::clone(&self), shutdown.clone())),
            tokio::spawn(Self::uptime_job(Arc::clone(&self), shutdown)),
        ];

        info!("Background jobs started");
        handles
    }

    /// Sweep expired BIN cache entries (every `BIN_CACHE_SWEEP_INTERVAL` seconds)
    async fn cache_sweep_job(scheduler: Arc<Self>, mut shutdown: watch::Receiver<bool>) {
        let period = Duration::from_secs(scheduler.context.config.lookup.sweep_interval.max(1));
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick fires immediately and the cache is empty at startup
        interval.tick().await;

        loop {
            tokio::select! {
                _ = shutdown.changed() => break,
                _ = interval.tick() => {}
            }

            let start = Instant::now();
            match tasks::sweep_bin_cache(&scheduler.context).await {
                Ok(count) => {
                    if count > 0 {
                        info!("Swept {} expired BIN cache entries", count);
                    } else {
                        debug!("Cache sweep: nothing expired");
                    }
                    metrics::record_background_job(
                        "cache_sweep",
                        "success",
                        start.elapsed().as_secs_f64(),
                    );
                }
                Err(e) => {
                    error!("Failed to sweep BIN cache: {}", e);
                    metrics::record_background_job(
                        "cache_sweep",
                        "failure",
                        start.elapsed().as_secs_f64(),
                    );
                }
            }
        }

        debug!("cache sweep job stopped");
    }

    /// Keep the uptime gauge current between scrapes
    async fn uptime_job(scheduler: Arc<Self>, mut shutdown: watch::Receiver<bool>) {
        let mut interval = interval(UPTIME_INTERVAL);

        loop {
            tokio::select! {
                _ = shutdown.changed() => break,
                _ = interval.tick() => tasks::update_uptime(&scheduler.context),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cache::{BinCache, CacheEntry, MemoryBinCache},
        card::{Bin, CardInfo},
        config::BotConfig,
        resolver::BinResolver,
    };
    use chrono::Duration as ChronoDuration;
    use std::collections::HashMap;

    fn context(cache: Arc<MemoryBinCache>, sweep_interval: u64) -> AppContext {
        let vars: HashMap<String, String> = [
            ("BOT_ENABLED", "false".to_string()),
            ("BIN_CACHE_SWEEP_INTERVAL", sweep_interval.to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        let config = BotConfig::from_source(|key| vars.get(key).cloned()).unwrap();
        let resolver = Arc::new(BinResolver::new(cache, Vec::new()));
        AppContext::with_resolver(config, reqwest::Client::new(), resolver)
    }

    fn entry(bin: &str) -> CacheEntry {
        CacheEntry::new(
            Bin::parse(bin).unwrap(),
            CardInfo {
                scheme: Some("visa".to_string()),
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_sweep_removes_only_expired() {
        let cache = Arc::new(MemoryBinCache::new().with_ttl(ChronoDuration::hours(1)));
        let mut stale = entry("457173");
        stale.stored_at = chrono::Utc::now() - ChronoDuration::hours(2);
        cache.put(stale).await.unwrap();
        cache.put(entry("537541")).await.unwrap();

        let ctx = context(Arc::clone(&cache), 3600);
        let removed = tasks::sweep_bin_cache(&ctx).await.unwrap();

        assert_eq!(removed, 1);
        assert_eq!(cache.entry_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_jobs_stop_on_shutdown() {
        let ctx = context(Arc::new(MemoryBinCache::new()), 1);
        let scheduler = Arc::new(JobScheduler::new(Arc::new(ctx)));
        let (tx, rx) = watch::channel(false);

        let handles = scheduler.start(rx);
        tx.send(true).unwrap();

        for handle in handles {
            tokio::time::timeout(Duration::from_secs(5), handle)
                .await
                .expect("job did not stop")
                .unwrap();
        }
    }
}
