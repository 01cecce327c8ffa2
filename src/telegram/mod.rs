/// Telegram transport
///
/// Long-polls the Bot API, routes each message to the lookup service in its
/// own task and sends back the reply.

pub mod client;
pub mod handler;

pub use client::{Message, ParseMode, TelegramClient, Update};
pub use handler::{reply_for, route, Reply, Route};

use crate::service::LookupService;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::{sleep, Duration};
use tracing::{debug, info, warn};

/// Pause after a failed getUpdates before polling again
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Telegram long-polling loop
pub struct TelegramPoller {
    client: Arc<TelegramClient>,
    service: LookupService,
    poll_timeout: u64,
}

impl TelegramPoller {
    pub fn new(client: Arc<TelegramClient>, service: LookupService, poll_timeout: u64) -> Self {
        Self {
            client,
            service,
            poll_timeout,
        }
    }

    /// Poll until the shutdown flag flips (or its sender goes away)
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!("Telegram poller started");
        let mut offset: Option<i64> = None;

        loop {
            if *shutdown.borrow() {
                break;
            }

            let polled = tokio::select! {
                _ = shutdown.changed() => break,
                polled = self.client.get_updates(offset, self.poll_timeout) => polled,
            };

            match polled {
                Ok(updates) => {
                    for update in updates {
                        offset = Some(update.update_id + 1);
                        if let Some(message) = update.message {
                            self.dispatch(message);
                        }
                    }
                }
                Err(e) => {
                    warn!(error = %e, "getUpdates failed, retrying");
                    tokio::select! {
                        _ = shutdown.changed() => break,
                        _ = sleep(RETRY_DELAY) => {}
                    }
                }
            }
        }

        info!("Telegram poller stopped");
    }

    /// Handle one message in the background
    fn dispatch(&self, message: Message) {
        let Some(text) = message.text else {
            return;
        };
        let client = Arc::clone(&self.client);
        let service = self.service.clone();
        let chat_id = message.chat.id;
        let message_id = message.message_id;

        tokio::spawn(async move {
            debug!(chat_id, message_id, "handling message");
            let Some(reply) = reply_for(&service, &text).await else {
                return;
            };
            if let Err(e) = client
                .send_message(chat_id, &reply.text, reply.parse_mode)
                .await
            {
                warn!(chat_id, error = %e, "failed to send reply");
            }
        });
    }
}
