/// Unified error types for the BIN lookup bot
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Internal error type shared by every component
#[derive(Error, Debug)]
pub enum BotError {
    /// Outbound HTTP errors (providers, Telegram)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A single provider failed to answer
    #[error("Provider error: {0}")]
    Provider(String),

    /// Cache backend errors
    #[error("Cache error: {0}")]
    Cache(String),

    /// Telegram Bot API rejected a call
    #[error("Telegram error: {0}")]
    Telegram(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Outcome of a lookup that did not produce a card, as seen by a transport
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// Fewer than 6 digits could be extracted
    #[error("invalid input")]
    InvalidInput,

    /// Every provider came back empty
    #[error("BIN not found")]
    NotFound,

    /// Resolution failed for a reason the user cannot fix
    #[error("lookup unavailable")]
    Unavailable,
}

impl LookupError {
    /// Reply text shown to the chat user
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::InvalidInput => "⚠️ Введіть мінімум 6 цифр. Приклад: 45717360",
            LookupError::NotFound => {
                "❌ BIN не знайдено в базі даних (або ліміти всіх API вичерпано)."
            }
            LookupError::Unavailable => "⚠️ Помилка з'єднання з серверами. Спробуйте пізніше.",
        }
    }

    /// Label used for metrics
    pub fn outcome(&self) -> &'static str {
        match self {
            LookupError::InvalidInput => "invalid",
            LookupError::NotFound => "not_found",
            LookupError::Unavailable => "error",
        }
    }
}

/// JSON error body returned by the HTTP surface
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let (status, error_code) = match self {
            LookupError::InvalidInput => (StatusCode::BAD_REQUEST, "InvalidInput"),
            LookupError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            LookupError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "Unavailable"),
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message: self.user_message().to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for bot operations
pub type BotResult<T> = Result<T, BotError>;
