/// BIN lookup providers
///
/// Each provider calls one third-party lookup service and maps its response
/// into `CardInfo`. Providers never fail loudly: network errors, bad statuses
/// and placeholder answers all come back as `None` so the resolver can move
/// on to the next one.

pub mod bininfo;
pub mod binlist;
pub mod freebinchecker;

pub use bininfo::BinInfoProvider;
pub use binlist::BinlistProvider;
pub use freebinchecker::FreeBinCheckerProvider;

use crate::{
    card::{parse_yes_no, Bin, CardInfo},
    error::{BotError, BotResult},
    metrics,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{fmt, future::Future, str::FromStr, sync::Arc, time::Duration, time::Instant};
use tracing::{debug, warn};

/// A single external BIN lookup service
#[async_trait]
pub trait BinProvider: Send + Sync {
    /// Identifier used in logs and metrics
    fn name(&self) -> &str;

    /// Look up a BIN; `None` means "no usable data from this provider"
    async fn lookup(&self, bin: &Bin) -> Option<CardInfo>;
}

/// Known provider identifiers, as used in `BIN_PROVIDER_ORDER`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Binlist,
    FreeBinChecker,
    BinInfo,
}

impl ProviderKind {
    /// Decreasing order of data quality
    pub const DEFAULT_ORDER: [ProviderKind; 3] = [
        ProviderKind::Binlist,
        ProviderKind::FreeBinChecker,
        ProviderKind::BinInfo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Binlist => "binlist",
            ProviderKind::FreeBinChecker => "freebinchecker",
            ProviderKind::BinInfo => "bininfo",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binlist" => Ok(ProviderKind::Binlist),
            "freebinchecker" => Ok(ProviderKind::FreeBinChecker),
            "bininfo" => Ok(ProviderKind::BinInfo),
            other => Err(BotError::Config(format!("Unknown BIN provider: {}", other))),
        }
    }
}

/// Base URLs of the provider endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderUrls {
    pub binlist: String,
    pub freebinchecker: String,
    pub bininfo: String,
}

impl Default for ProviderUrls {
    fn default() -> Self {
        Self {
            binlist: "https://lookup.binlist.net".to_string(),
            freebinchecker: "https://api.freebinchecker.com/bin".to_string(),
            bininfo: "https://bininfo.io/bin".to_string(),
        }
    }
}

/// Build the shared outbound HTTP client
pub fn build_http_client(user_agent: &str, timeout: Duration) -> BotResult<Client> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .map_err(|e| BotError::Internal(format!("Failed to create HTTP client: {}", e)))
}

/// Instantiate providers in the given priority order
pub fn build_providers(
    order: &[ProviderKind],
    client: &Client,
    urls: &ProviderUrls,
) -> Vec<Arc<dyn BinProvider>> {
    order
        .iter()
        .map(|kind| -> Arc<dyn BinProvider> {
            match kind {
                ProviderKind::Binlist => {
                    Arc::new(BinlistProvider::new(client.clone(), &urls.binlist))
                }
                ProviderKind::FreeBinChecker => {
                    Arc::new(FreeBinCheckerProvider::new(client.clone(), &urls.freebinchecker))
                }
                ProviderKind::BinInfo => {
                    Arc::new(BinInfoProvider::new(client.clone(), &urls.bininfo))
                }
            }
        })
        .collect()
}

/// `{base}/{bin}` without doubled slashes
fn endpoint(base_url: &str, bin: &Bin) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), bin)
}

/// Send a GET and decode the JSON body
///
/// 404 is the usual "unknown BIN" answer and maps to `Ok(None)`; every other
/// non-success status is an error.
async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> BotResult<Option<T>> {
    let response = request.send().await?;
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(BotError::Provider(format!("returned HTTP {}", status)));
    }

    let body = response.json::<T>().await?;
    Ok(Some(body))
}

/// Collapse a provider attempt into the `Option` contract, logging the outcome
async fn settle<F>(provider: &str, bin: &Bin, attempt: F) -> Option<CardInfo>
where
    F: Future<Output = BotResult<Option<CardInfo>>>,
{
    let start = Instant::now();
    let result = attempt.await;
    let elapsed = start.elapsed().as_secs_f64();

    match result {
        Ok(Some(info)) if !info.is_empty() => {
            debug!(provider, bin = %bin, "provider returned card data");
            metrics::record_provider_request(provider, "hit", elapsed);
            Some(info)
        }
        Ok(_) => {
            debug!(provider, bin = %bin, "provider has no data");
            metrics::record_provider_request(provider, "empty", elapsed);
            None
        }
        Err(e) => {
            warn!(provider, bin = %bin, error = %e, "provider lookup failed");
            metrics::record_provider_request(provider, "error", elapsed);
            None
        }
    }
}

/// First non-blank of two candidate values
fn first_present(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    let non_blank = |v: &String| !v.trim().is_empty();
    primary.filter(non_blank).or_else(|| fallback.filter(non_blank))
}

/// Prepaid arrives as a JSON bool or as "Yes"/"No"-style text
fn prepaid_from_value(value: Option<&serde_json::Value>) -> Option<bool> {
    match value? {
        serde_json::Value::Bool(b) => Some(*b),
        serde_json::Value::String(s) => parse_yes_no(s),
        _ => None,
    }
}
