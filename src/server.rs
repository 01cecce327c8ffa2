/// HTTP server setup and routing
use crate::{
    context::AppContext,
    error::{BotError, BotResult},
};
use axum::{http::StatusCode, response::Json, Router};
use serde_json::json;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the main application router
/// Returns Router<()> because state is already provided
pub fn build_router(ctx: AppContext) -> Router {
    Router::new()
        // Health, lookup and metrics endpoints - merge before with_state
        .merge(crate::api::routes())
        // Provide state - converts Router<AppContext> to Router<()>
        .with_state(ctx)
        .layer(TraceLayer::new_for_http())
        .fallback(not_found)
}

/// 404 handler
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "NotFound",
            "message": "Endpoint not found"
        })),
    )
}

/// Start the HTTP server and run until `shutdown` flips to true
pub async fn serve(ctx: AppContext, mut shutdown: watch::Receiver<bool>) -> BotResult<()> {
    let addr = ctx.listen_addr();

    info!("🚀 BIN lookup bot listening on {}", addr);
    info!("   Providers: {}", ctx.resolver.provider_names().join(" -> "));

    let app = build_router(ctx);

    // Create TCP listener
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BotError::Internal(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            // A dropped sender also stops the server
            let _ = shutdown.wait_for(|stop| *stop).await;
        })
        .await
        .map_err(|e| BotError::Internal(format!("Server error: {}", e)))?;

    info!("HTTP server stopped");
    Ok(())
}
