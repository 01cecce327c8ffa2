/// Health check endpoints for liveness and readiness probes
///
/// The root path answers with plain text for hosting platforms that only
/// check for a 200; the JSON endpoints give more detail.

use crate::{context::AppContext, metrics};
use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Health status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,

    /// Application version
    pub version: String,

    /// Uptime in seconds
    pub uptime_seconds: f64,

    /// Individual component checks
    pub checks: Vec<ComponentHealth>,
}

/// Health status of individual component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component name
    pub name: String,

    /// Status: "healthy" or "unhealthy"
    pub status: String,

    /// Response time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,

    /// Optional error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Build health check routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_basic))
        .route("/health/live", get(liveness_probe))
        .route("/health/detailed", get(health_detailed))
}

/// Plain-text liveness answer
pub async fn root() -> &'static str {
    "Bot is running OK"
}

/// Basic health check
pub async fn health_basic() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Liveness probe
///
/// If we can respond, we're alive
pub async fn liveness_probe() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Detailed health check with all component statuses
pub async fn health_detailed(State(ctx): State<AppContext>) -> (StatusCode, Json<HealthStatus>) {
    let start = Instant::now();

    let checks = vec![check_cache(&ctx).await, check_providers(&ctx)];

    let healthy = checks.iter().all(|c| c.status == "healthy");
    let overall_status = if healthy { "healthy" } else { "unhealthy" };

    let uptime = ctx.uptime_seconds();
    metrics::UPTIME_SECONDS.set(uptime);

    let health = HealthStatus {
        status: overall_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
        checks,
    };

    tracing::debug!(
        status = %overall_status,
        duration_ms = start.elapsed().as_millis(),
        "health_check_completed"
    );

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status_code, Json(health))
}

/// Check the BIN cache answers
async fn check_cache(ctx: &AppContext) -> ComponentHealth {
    let start = Instant::now();

    match ctx.resolver.cache_size().await {
        Ok(entries) => ComponentHealth {
            name: "cache".to_string(),
            status: "healthy".to_string(),
            response_time_ms: Some(start.elapsed().as_millis() as u64),
            error: None,
            details: Some(serde_json::json!({
                "type": "memory",
                "entries": entries,
                "ttl_seconds": ctx.config.lookup.ttl.num_seconds(),
            })),
        },
        Err(e) => ComponentHealth {
            name: "cache".to_string(),
            status: "unhealthy".to_string(),
            response_time_ms: Some(start.elapsed().as_millis() as u64),
            error: Some(e.to_string()),
            details: None,
        },
    }
}

/// Report the configured provider chain
fn check_providers(ctx: &AppContext) -> ComponentHealth {
    let providers = ctx.resolver.provider_names();
    let healthy = !providers.is_empty();

    ComponentHealth {
        name: "providers".to_string(),
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        response_time_ms: None,
        error: if healthy {
            None
        } else {
            Some("no providers configured".to_string())
        },
        details: Some(serde_json::json!({ "order": providers })),
    }
}
