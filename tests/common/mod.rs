//! Shared fixtures: a local axum server impersonating the BIN providers
#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use bin_lookup_bot::{config::BotConfig, context::AppContext};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// BIN every provider knows: binlist answers first
pub const VISA_BIN: &str = "45717360";
/// Unknown everywhere
pub const UNKNOWN_BIN: &str = "40000000";
/// binlist fails with 500, freebinchecker answers
pub const FALLBACK_BIN: &str = "55555555";
/// binlist sends garbage, freebinchecker 404s, bininfo answers
pub const LAST_RESORT_BIN: &str = "66666666";

/// binlist stalls past the provider timeout, freebinchecker answers
pub const SLOW_BIN: &str = "77777777";
/// How long binlist stalls on `SLOW_BIN`
pub const SLOW_DELAY: std::time::Duration = std::time::Duration::from_secs(3);

/// Ordered log of provider calls, as `provider:bin`
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn push(&self, provider: &str, bin: &str) {
        self.0.lock().unwrap().push(format!("{}:{}", provider, bin));
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

/// Serve `router` on an ephemeral port and return its base URL
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn binlist(State(log): State<CallLog>, Path(bin): Path<String>) -> Response {
    log.push("binlist", &bin);
    match bin.as_str() {
        VISA_BIN => Json(json!({
            "number": { "length": 16, "luhn": true },
            "scheme": "visa",
            "type": "debit",
            "brand": "Visa Classic",
            "prepaid": false,
            "country": { "alpha2": "UA", "name": "Ukraine", "emoji": "🇺🇦" },
            "bank": { "name": "Test Bank", "url": "www.testbank.ua", "phone": "+380441234567" }
        }))
        .into_response(),
        FALLBACK_BIN => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        SLOW_BIN => {
            tokio::time::sleep(SLOW_DELAY).await;
            Json(json!({ "scheme": "visa", "bank": { "name": "Too Late Bank" } })).into_response()
        }
        LAST_RESORT_BIN => (StatusCode::OK, "<html>rate limited</html>").into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn freebinchecker(State(log): State<CallLog>, Path(bin): Path<String>) -> Response {
    log.push("freebinchecker", &bin);
    match bin.as_str() {
        FALLBACK_BIN => Json(json!({
            "valid": true,
            "card": { "scheme": "mastercard", "type": "credit", "category": "World", "prepaid": "No" },
            "issuer": { "name": "Fallback Bank" },
            "country": { "name": "Poland", "alpha2": "PL" }
        }))
        .into_response(),
        SLOW_BIN => Json(json!({
            "valid": true,
            "card": { "scheme": "mastercard", "type": "debit" },
            "issuer": { "name": "Punctual Bank" }
        }))
        .into_response(),
        UNKNOWN_BIN => Json(json!({ "valid": false })).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn bininfo(State(log): State<CallLog>, Path(bin): Path<String>) -> Response {
    log.push("bininfo", &bin);
    match bin.as_str() {
        LAST_RESORT_BIN => Json(json!({
            "bin": 66666666,
            "scheme": "amex",
            "type": "credit",
            "prepaid": "Yes",
            "country_name": "United States",
            "country_code": "US",
            "bank_name": "Last Bank"
        }))
        .into_response(),
        _ => Json(json!({ "bin": "", "scheme": "" })).into_response(),
    }
}

/// Start the fake providers; returns their base URL and the call log
pub async fn fake_providers() -> (String, CallLog) {
    let log = CallLog::default();
    let router = Router::new()
        .route("/binlist/:bin", get(binlist))
        .route("/freebinchecker/:bin", get(freebinchecker))
        .route("/bininfo/:bin", get(bininfo))
        .with_state(log.clone());
    (spawn(router).await, log)
}

/// Configuration pointing every provider at `base`, Telegram off
pub fn config_for(base: &str, extra: &[(&str, &str)]) -> BotConfig {
    let mut vars: HashMap<String, String> = HashMap::new();
    vars.insert("BOT_ENABLED".into(), "false".into());
    vars.insert("BIN_PROVIDER_TIMEOUT".into(), "5".into());
    vars.insert("BINLIST_URL".into(), format!("{}/binlist", base));
    vars.insert("FREEBINCHECKER_URL".into(), format!("{}/freebinchecker", base));
    vars.insert("BININFO_URL".into(), format!("{}/bininfo", base));
    for (key, value) in extra {
        vars.insert(key.to_string(), value.to_string());
    }
    BotConfig::from_source(|key| vars.get(key).cloned()).unwrap()
}

/// Full application context wired to the fake providers
pub async fn test_context() -> (AppContext, CallLog) {
    let (base, log) = fake_providers().await;
    let ctx = AppContext::new(config_for(&base, &[])).unwrap();
    (ctx, log)
}
