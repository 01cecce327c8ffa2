/// Application context and dependency injection
use crate::{
    cache::MemoryBinCache,
    config::BotConfig,
    error::BotResult,
    providers::{build_http_client, build_providers},
    resolver::BinResolver,
    service::LookupService,
    telegram::TelegramClient,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Application context holding all shared services
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<BotConfig>,
    pub http_client: reqwest::Client,
    pub resolver: Arc<BinResolver>,
    pub lookup: LookupService,
    pub started_at: Instant,
}

impl AppContext {
    /// Create a new application context from configuration
    pub fn new(config: BotConfig) -> BotResult<Self> {
        // Validate configuration
        config.validate()?;

        let http_client = build_http_client(
            &config.lookup.user_agent,
            Duration::from_secs(config.lookup.provider_timeout),
        )?;

        // In-memory cache owned by the resolver
        let cache = Arc::new(MemoryBinCache::new().with_ttl(config.lookup.ttl));
        let providers = build_providers(
            &config.lookup.provider_order,
            &http_client,
            &config.lookup.provider_urls,
        );
        let resolver = Arc::new(BinResolver::new(cache, providers));

        tracing::info!(
            providers = ?resolver.provider_names(),
            ttl_secs = config.lookup.ttl.num_seconds(),
            "BIN resolver ready"
        );

        Ok(Self::with_resolver(config, http_client, resolver))
    }

    /// Assemble a context around an existing resolver
    pub fn with_resolver(
        config: BotConfig,
        http_client: reqwest::Client,
        resolver: Arc<BinResolver>,
    ) -> Self {
        let lookup = LookupService::new(Arc::clone(&resolver));
        Self {
            config: Arc::new(config),
            http_client,
            resolver,
            lookup,
            started_at: Instant::now(),
        }
    }

    /// Telegram client, when the bot is enabled and has a token
    pub fn telegram_client(&self) -> Option<TelegramClient> {
        let telegram = &self.config.telegram;
        if !telegram.enabled {
            return None;
        }
        telegram
            .token
            .as_deref()
            .map(|token| TelegramClient::new(self.http_client.clone(), &telegram.api_url, token))
    }

    /// Get listen address
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.config.service.host, self.config.service.port)
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
