/// Message routing for the Telegram transport
use crate::{
    card::contains_bin_candidate,
    error::LookupError,
    metrics,
    service::LookupService,
};
use super::client::ParseMode;
use tracing::error;

pub const START_TEXT: &str =
    "Привіт! 👋\nВідправ мені номер картки (або перші 6-8 цифр), і я покажу інформацію про неї.";

pub const HELP_TEXT: &str =
    "Просто напиши в чат цифри BIN (наприклад: 537541). Або використовуй команду /bin 537541.";

/// What to do with an incoming message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Start,
    Help,
    Lookup,
    Ignore,
}

/// Outgoing reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub parse_mode: Option<ParseMode>,
}

impl Reply {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            parse_mode: None,
        }
    }
}

/// `/bin@my_bot 123` -> `bin`
fn command_name(text: &str) -> Option<String> {
    let token = text.strip_prefix('/')?.split_whitespace().next()?;
    let name = token.split('@').next()?;
    Some(name.to_lowercase())
}

/// Decide how to handle a message text
pub fn route(text: &str) -> Route {
    if text.starts_with('/') {
        return match command_name(text).as_deref() {
            Some("start") => Route::Start,
            Some("help") => Route::Help,
            Some("bin") => Route::Lookup,
            _ => Route::Ignore,
        };
    }

    if contains_bin_candidate(text) {
        Route::Lookup
    } else {
        Route::Ignore
    }
}

/// Build the reply for a message, or `None` when the bot stays silent
///
/// The lookup runs in its own task so that a panic anywhere in the core
/// still produces the generic "try again later" reply.
pub async fn reply_for(service: &LookupService, text: &str) -> Option<Reply> {
    let route = route(text);
    metrics::record_telegram_update(match route {
        Route::Start | Route::Help => "command",
        Route::Lookup => "lookup",
        Route::Ignore => "ignored",
    });

    match route {
        Route::Start => Some(Reply::plain(START_TEXT)),
        Route::Help => Some(Reply::plain(HELP_TEXT)),
        Route::Ignore => None,
        Route::Lookup => {
            let service = service.clone();
            let text = text.to_string();
            let outcome = tokio::spawn(async move { service.resolve(&text).await })
                .await
                .unwrap_or_else(|e| {
                    error!(error = %e, "lookup task failed");
                    Err(LookupError::Unavailable)
                });

            Some(match outcome {
                Ok(formatted) => Reply {
                    text: formatted,
                    parse_mode: Some(ParseMode::Markdown),
                },
                Err(e) => Reply::plain(e.user_message()),
            })
        }
    }
}
