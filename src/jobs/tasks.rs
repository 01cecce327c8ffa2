/// Background task implementations
use crate::{context::AppContext, error::BotResult, metrics};

/// Drop expired entries from the BIN cache and refresh the size gauge
pub async fn sweep_bin_cache(ctx: &AppContext) -> BotResult<u64> {
    let removed = ctx.resolver.cleanup_cache().await?;
    let remaining = ctx.resolver.cache_size().await?;
    metrics::set_cache_size(remaining);
    Ok(removed)
}

/// Refresh the uptime gauge
pub fn update_uptime(ctx: &AppContext) {
    metrics::UPTIME_SECONDS.set(ctx.uptime_seconds());
}
