/// Minimal Telegram Bot API client (long polling + sendMessage)
use crate::error::{BotError, BotResult};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Extra seconds on top of the long-poll timeout before giving up on getUpdates
const POLL_GRACE_SECS: u64 = 10;

/// Envelope every Bot API method answers with
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// Formatting mode for outgoing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    Markdown,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<ParseMode>,
}

#[derive(Debug, Serialize)]
struct GetUpdatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
    timeout: u64,
    allowed_updates: [&'static str; 1],
}

/// Bot API client bound to one token
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    base_url: String,
}

impl TelegramClient {
    pub fn new(http: Client, api_url: &str, token: &str) -> Self {
        Self {
            http,
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        }
    }

    /// POST a method call and unwrap the `{ok, result}` envelope
    ///
    /// URLs carry the bot token, so it is stripped from transport errors.
    async fn call<B, T>(&self, method: &str, body: &B, timeout: Option<Duration>) -> BotResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self
            .http
            .post(format!("{}/{}", self.base_url, method))
            .json(body);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BotError::Http(e.without_url()))?;
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| BotError::Http(e.without_url()))?;

        if !envelope.ok {
            return Err(BotError::Telegram(format!(
                "{} failed: {}",
                method,
                envelope.description.unwrap_or_else(|| "no description".to_string())
            )));
        }

        envelope
            .result
            .ok_or_else(|| BotError::Telegram(format!("{} returned no result", method)))
    }

    /// Long-poll for new messages
    pub async fn get_updates(&self, offset: Option<i64>, timeout_secs: u64) -> BotResult<Vec<Update>> {
        let body = GetUpdatesRequest {
            offset,
            timeout: timeout_secs,
            allowed_updates: ["message"],
        };
        let timeout = Duration::from_secs(timeout_secs + POLL_GRACE_SECS);
        let updates: Vec<Update> = self.call("getUpdates", &body, Some(timeout)).await?;
        if !updates.is_empty() {
            debug!(count = updates.len(), "received updates");
        }
        Ok(updates)
    }

    /// Send a text message to a chat
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> BotResult<()> {
        let body = SendMessageRequest {
            chat_id,
            text,
            parse_mode,
        };
        let _sent: serde_json::Value = self.call("sendMessage", &body, None).await?;
        Ok(())
    }
}
