/// BIN lookup over HTTP
///
/// Same pipeline as the chat transport, answered as JSON.
use crate::{context::AppContext, error::LookupError, service::LookupReply};
use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

pub fn routes() -> Router<AppContext> {
    Router::new().route("/api/bin/:query", get(lookup_bin))
}

/// `GET /api/bin/:query`
///
/// `query` is free text: `4571 7360` and `457173601234` both work.
pub async fn lookup_bin(
    State(ctx): State<AppContext>,
    Path(query): Path<String>,
) -> Result<Json<LookupReply>, LookupError> {
    let reply = ctx.lookup.lookup(&query).await?;
    Ok(Json(reply))
}
