//! BIN lookup bot
//!
//! Resolves the Bank Identification Number of a payment card through a chain
//! of public lookup providers, caches the answer and renders it as a
//! Ukrainian chat message. Transports (Telegram long polling, the HTTP API
//! and the CLI) all go through [`service::LookupService`].

pub mod api;
pub mod cache;
pub mod card;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod jobs;
pub mod metrics;
pub mod providers;
pub mod resolver;
pub mod server;
pub mod service;
pub mod telegram;

pub use context::AppContext;
pub use error::{BotError, BotResult, LookupError};
