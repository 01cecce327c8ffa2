/// Metrics and telemetry for the BIN lookup bot
///
/// Provides Prometheus-compatible metrics for monitoring:
/// - Lookup outcomes
/// - Provider hit/empty/error counts and latencies
/// - Cache hit/miss rates
/// - Background job execution
/// - Telegram update traffic

use lazy_static::lazy_static;
use prometheus::{
    register_gauge, register_histogram_vec, register_int_counter_vec, register_int_gauge, Encoder,
    Gauge, HistogramVec, IntCounterVec, IntGauge, TextEncoder,
};

lazy_static! {
    // ========== Lookup Metrics ==========

    /// Lookups by outcome (found, not_found, invalid, error)
    pub static ref BIN_LOOKUPS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "bin_lookups_total",
        "Total number of BIN lookups by outcome",
        &["outcome"]
    )
    .expect("bin_lookups_total registers once");

    /// Provider requests by provider and status (hit, empty, error)
    pub static ref BIN_PROVIDER_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "bin_provider_requests_total",
        "Total number of provider requests",
        &["provider", "status"]
    )
    .expect("bin_provider_requests_total registers once");

    /// Provider request duration in seconds
    pub static ref BIN_PROVIDER_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "bin_provider_request_duration_seconds",
        "Provider request latencies in seconds",
        &["provider"],
        vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("bin_provider_request_duration_seconds registers once");

    // ========== Cache Metrics ==========

    /// Cache hits by cache type
    pub static ref CACHE_HITS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "cache_hits_total",
        "Total number of cache hits",
        &["cache_type"]
    )
    .expect("cache_hits_total registers once");

    /// Cache misses by cache type
    pub static ref CACHE_MISSES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "cache_misses_total",
        "Total number of cache misses",
        &["cache_type"]
    )
    .expect("cache_misses_total registers once");

    /// Cache size (number of entries)
    pub static ref CACHE_SIZE: IntGauge = register_int_gauge!(
        "cache_size",
        "Number of entries in cache"
    )
    .expect("cache_size registers once");

    // ========== Background Job Metrics ==========

    /// Background job executions by job type and status
    pub static ref BACKGROUND_JOBS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "background_jobs_total",
        "Total number of background job executions",
        &["job_type", "status"]
    )
    .expect("background_jobs_total registers once");

    /// Background job duration in seconds
    pub static ref BACKGROUND_JOB_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "background_job_duration_seconds",
        "Background job execution time in seconds",
        &["job_type"],
        vec![0.001, 0.01, 0.1, 0.5, 1.0, 5.0]
    )
    .expect("background_job_duration_seconds registers once");

    // ========== Transport Metrics ==========

    /// Telegram updates by kind (command, text, ignored)
    pub static ref TELEGRAM_UPDATES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "telegram_updates_total",
        "Total number of Telegram updates handled",
        &["kind"]
    )
    .expect("telegram_updates_total registers once");

    // ========== System Metrics ==========

    /// Application uptime in seconds
    pub static ref UPTIME_SECONDS: Gauge = register_gauge!(
        "uptime_seconds",
        "Application uptime in seconds"
    )
    .expect("uptime_seconds registers once");
}

/// Render metrics in Prometheus text format
pub fn render_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::warn!(error = %e, "failed to encode metrics");
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Record the outcome of a lookup
pub fn record_lookup(outcome: &str) {
    BIN_LOOKUPS_TOTAL.with_label_values(&[outcome]).inc();
}

/// Record a provider request
pub fn record_provider_request(provider: &str, status: &str, duration: f64) {
    BIN_PROVIDER_REQUESTS_TOTAL
        .with_label_values(&[provider, status])
        .inc();
    BIN_PROVIDER_REQUEST_DURATION_SECONDS
        .with_label_values(&[provider])
        .observe(duration);
}

/// Record a cache access
pub fn record_cache_access(cache_type: &str, hit: bool) {
    if hit {
        CACHE_HITS_TOTAL.with_label_values(&[cache_type]).inc();
    } else {
        CACHE_MISSES_TOTAL.with_label_values(&[cache_type]).inc();
    }
}

/// Update the cache size gauge
pub fn set_cache_size(entries: usize) {
    CACHE_SIZE.set(entries as i64);
}

/// Record a background job execution
pub fn record_background_job(job_type: &str, status: &str, duration: f64) {
    BACKGROUND_JOBS_TOTAL
        .with_label_values(&[job_type, status])
        .inc();
    BACKGROUND_JOB_DURATION_SECONDS
        .with_label_values(&[job_type])
        .observe(duration);
}

/// Record a Telegram update
pub fn record_telegram_update(kind: &str) {
    TELEGRAM_UPDATES_TOTAL.with_label_values(&[kind]).inc();
}
