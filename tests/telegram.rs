//! Telegram transport against a fake Bot API

mod common;

use axum::{extract::State, routing::post, Json, Router};
use bin_lookup_bot::{
    error::BotError,
    telegram::{ParseMode, TelegramClient, TelegramPoller},
};
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::{mpsc, watch};
use tokio::time::{timeout, Duration};

const TOKEN: &str = "TESTTOKEN";

#[derive(Clone)]
struct FakeBotApi {
    pending: Arc<std::sync::Mutex<Vec<Value>>>,
    sent: mpsc::UnboundedSender<Value>,
    fail_updates: Arc<AtomicBool>,
}

async fn get_updates(State(api): State<FakeBotApi>) -> Json<Value> {
    if api.fail_updates.load(Ordering::SeqCst) {
        return Json(json!({ "ok": false, "error_code": 401, "description": "Unauthorized" }));
    }
    let updates: Vec<Value> = std::mem::take(&mut *api.pending.lock().unwrap());
    if updates.is_empty() {
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    Json(json!({ "ok": true, "result": updates }))
}

async fn send_message(State(api): State<FakeBotApi>, Json(body): Json<Value>) -> Json<Value> {
    api.sent.send(body.clone()).ok();
    Json(json!({
        "ok": true,
        "result": { "message_id": 99, "chat": { "id": body["chat_id"] }, "text": body["text"] }
    }))
}

fn update(id: i64, chat_id: i64, text: &str) -> Value {
    json!({
        "update_id": id,
        "message": { "message_id": id, "chat": { "id": chat_id, "type": "private" }, "text": text }
    })
}

async fn fake_bot_api(updates: Vec<Value>) -> (String, FakeBotApi, mpsc::UnboundedReceiver<Value>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let api = FakeBotApi {
        pending: Arc::new(std::sync::Mutex::new(updates)),
        sent: tx,
        fail_updates: Arc::new(AtomicBool::new(false)),
    };
    let router = Router::new()
        .route(&format!("/bot{}/getUpdates", TOKEN), post(get_updates))
        .route(&format!("/bot{}/sendMessage", TOKEN), post(send_message))
        .with_state(api.clone());
    (common::spawn(router).await, api, rx)
}

async fn next_sent(rx: &mut mpsc::UnboundedReceiver<Value>) -> Value {
    timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no message sent")
        .expect("channel closed")
}

#[tokio::test]
async fn test_poller_answers_lookup_and_commands() {
    let (ctx, _log) = common::test_context().await;
    let (api_url, _api, mut sent) = fake_bot_api(vec![
        update(1, 42, "/start"),
        update(2, 42, "/bin 457173 60"),
        update(3, 42, "just chatting"),
    ])
    .await;

    let client = TelegramClient::new(reqwest::Client::new(), &api_url, TOKEN);
    let poller = TelegramPoller::new(Arc::new(client), ctx.lookup.clone(), 1);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let handle = tokio::spawn(poller.run(shutdown_rx));

    let mut replies = vec![next_sent(&mut sent).await, next_sent(&mut sent).await];
    replies.sort_by_key(|r| r["parse_mode"].is_string());

    assert_eq!(replies[0]["chat_id"], 42);
    assert!(replies[0]["text"].as_str().unwrap().starts_with("Привіт!"));
    assert!(replies[0].get("parse_mode").is_none());

    assert_eq!(replies[1]["parse_mode"], "Markdown");
    assert!(replies[1]["text"]
        .as_str()
        .unwrap()
        .contains("📌 *Система:* Visa"));

    // "just chatting" gets no reply
    assert!(timeout(Duration::from_millis(300), sent.recv()).await.is_err());

    shutdown_tx.send(true).unwrap();
    timeout(Duration::from_secs(5), handle)
        .await
        .expect("poller did not stop")
        .unwrap();
}

#[tokio::test]
async fn test_api_rejection_is_reported_without_token() {
    let (api_url, api, _sent) = fake_bot_api(Vec::new()).await;
    api.fail_updates.store(true, Ordering::SeqCst);

    let client = TelegramClient::new(reqwest::Client::new(), &api_url, TOKEN);
    let err = client.get_updates(None, 0).await.unwrap_err();

    assert!(matches!(err, BotError::Telegram(_)));
    assert!(err.to_string().contains("Unauthorized"));
    assert!(!err.to_string().contains(TOKEN));
}

#[tokio::test]
async fn test_transport_error_hides_token() {
    let client = TelegramClient::new(reqwest::Client::new(), "http://127.0.0.1:9", TOKEN);
    let err = client
        .send_message(1, "hi", Some(ParseMode::Markdown))
        .await
        .unwrap_err();

    assert!(matches!(err, BotError::Http(_)));
    assert!(!err.to_string().contains(TOKEN));
}

#[tokio::test]
async fn test_poller_stops_while_retrying() {
    let (api_url, api, _sent) = fake_bot_api(Vec::new()).await;
    api.fail_updates.store(true, Ordering::SeqCst);
    let (ctx, _log) = common::test_context().await;

    let client = TelegramClient::new(reqwest::Client::new(), &api_url, TOKEN);
    let poller = TelegramPoller::new(Arc::new(client), ctx.lookup.clone(), 1);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let handle = tokio::spawn(poller.run(shutdown_rx));

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown_tx.send(true).unwrap();

    timeout(Duration::from_secs(2), handle)
        .await
        .expect("poller stuck in retry delay")
        .unwrap();
}
