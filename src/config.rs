/// Configuration management for the BIN lookup bot
use crate::{
    cache::DEFAULT_TTL_SECS,
    error::{BotError, BotResult},
    providers::{ProviderKind, ProviderUrls},
};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::env;
use std::path::Path;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "bin_lookup_bot=info,tower_http=info";

/// Main bot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    pub service: ServiceConfig,
    pub telegram: TelegramConfig,
    pub lookup: LookupConfig,
    pub logging: LoggingConfig,
}

/// Health/API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub version: String,
}

/// Telegram transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    pub enabled: bool,
    #[serde(skip_serializing)]
    pub token: Option<String>,
    pub api_url: String,
    /// Long-poll timeout in seconds
    pub poll_timeout: u64,
}

/// Options consumed by the resolution core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// How long a resolved BIN stays cached
    #[serde(with = "duration_secs")]
    pub ttl: Duration,
    /// Providers in priority order
    pub provider_order: Vec<ProviderKind>,
    /// Seconds between expired-entry sweeps
    pub sweep_interval: u64,
    /// Per-request provider timeout in seconds
    pub provider_timeout: u64,
    pub user_agent: String,
    pub provider_urls: ProviderUrls,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::seconds(DEFAULT_TTL_SECS),
            provider_order: ProviderKind::DEFAULT_ORDER.to_vec(),
            sweep_interval: 3600,
            provider_timeout: 10,
            user_agent: format!("bin-lookup-bot/{}", env!("CARGO_PKG_VERSION")),
            provider_urls: ProviderUrls::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

/// Serialize a `chrono::Duration` as whole seconds
mod duration_secs {
    use chrono::Duration;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = i64::deserialize(deserializer)?;
        Duration::try_seconds(secs).ok_or_else(|| D::Error::custom("duration out of range"))
    }
}

/// Parse a comma-separated provider list
pub fn parse_provider_order(value: &str) -> BotResult<Vec<ProviderKind>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

impl BotConfig {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> BotResult<Self> {
        dotenv::dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    /// Load configuration from a dotenv-style file, ignoring the process environment
    pub fn from_env_file(path: &Path) -> BotResult<Self> {
        let iter = dotenv::from_path_iter(path).map_err(|e| {
            BotError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) = item
                .map_err(|e| BotError::Config(format!("Invalid line in {}: {}", path.display(), e)))?;
            vars.insert(key, value);
        }

        Self::from_source(|key| vars.get(key).cloned())
    }

    /// Build configuration from any key lookup
    pub fn from_source<F>(get: F) -> BotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = var("PORT", "3000")
            .parse()
            .map_err(|_| BotError::Config("Invalid port number".to_string()))?;
        let version = env!("CARGO_PKG_VERSION").to_string();

        let enabled = var("BOT_ENABLED", "true").parse().unwrap_or(true);
        let token = get("BOT_TOKEN").filter(|t| !t.trim().is_empty());
        let api_url = var("TELEGRAM_API_URL", "https://api.telegram.org");
        let poll_timeout = var("TELEGRAM_POLL_TIMEOUT", "30").parse().unwrap_or(30);

        let defaults = LookupConfig::default();
        let ttl_secs: i64 = var("BIN_CACHE_TTL", &DEFAULT_TTL_SECS.to_string())
            .parse()
            .map_err(|_| BotError::Config("Invalid BIN_CACHE_TTL".to_string()))?;
        let ttl = Duration::try_seconds(ttl_secs)
            .ok_or_else(|| BotError::Config("BIN_CACHE_TTL is out of range".to_string()))?;
        let provider_order = match get("BIN_PROVIDER_ORDER") {
            Some(value) => parse_provider_order(&value)?,
            None => defaults.provider_order,
        };
        let sweep_interval = var("BIN_CACHE_SWEEP_INTERVAL", "3600")
            .parse()
            .unwrap_or(defaults.sweep_interval);
        let provider_timeout = var("BIN_PROVIDER_TIMEOUT", "10")
            .parse()
            .unwrap_or(defaults.provider_timeout);
        let user_agent = get("BIN_USER_AGENT").unwrap_or(defaults.user_agent);

        let urls = ProviderUrls::default();
        let provider_urls = ProviderUrls {
            binlist: get("BINLIST_URL").unwrap_or(urls.binlist),
            freebinchecker: get("FREEBINCHECKER_URL").unwrap_or(urls.freebinchecker),
            bininfo: get("BININFO_URL").unwrap_or(urls.bininfo),
        };

        let log_level = var("RUST_LOG", DEFAULT_LOG_FILTER);
        let log_format = var("LOG_FORMAT", "pretty").to_lowercase();

        Ok(BotConfig {
            service: ServiceConfig {
                host,
                port,
                version,
            },
            telegram: TelegramConfig {
                enabled,
                token,
                api_url,
                poll_timeout,
            },
            lookup: LookupConfig {
                ttl,
                provider_order,
                sweep_interval,
                provider_timeout,
                user_agent,
                provider_urls,
            },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> BotResult<()> {
        if self.telegram.enabled && self.telegram.token.is_none() {
            return Err(BotError::Config("BOT_TOKEN is not set".to_string()));
        }

        if self.lookup.provider_order.is_empty() {
            return Err(BotError::Config(
                "BIN_PROVIDER_ORDER must name at least one provider".to_string(),
            ));
        }

        let unique: HashSet<_> = self.lookup.provider_order.iter().collect();
        if unique.len() != self.lookup.provider_order.len() {
            return Err(BotError::Config(
                "BIN_PROVIDER_ORDER lists a provider twice".to_string(),
            ));
        }

        if self.lookup.ttl <= Duration::zero() {
            return Err(BotError::Config("BIN_CACHE_TTL must be positive".to_string()));
        }

        if self.lookup.provider_timeout == 0 {
            return Err(BotError::Config(
                "BIN_PROVIDER_TIMEOUT must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
