/// Prometheus scrape endpoint
use crate::{context::AppContext, metrics};
use axum::{extract::State, http::header, response::IntoResponse, routing::get, Router};

pub fn routes() -> Router<AppContext> {
    Router::new().route("/metrics", get(scrape))
}

async fn scrape(State(ctx): State<AppContext>) -> impl IntoResponse {
    metrics::UPTIME_SECONDS.set(ctx.uptime_seconds());
    if let Ok(entries) = ctx.resolver.cache_size().await {
        metrics::set_cache_size(entries);
    }

    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::render_metrics(),
    )
}
