pub mod client;
pub mod notifier;

pub use client::TelegramClient;
pub use notifier::Notifier;

use async_trait::async_trait;

/// Transport-level outcome of one Bot API call
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("bot token rejected")]
    Unauthorized,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("telegram answered with status {code}: {description}")]
    Api { code: u16, description: String },
    #[error("network error: {0}")]
    Network(String),
}

/// Delivery failure as seen by the rest of the pipeline
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("telegram rejected the bot credential")]
    Auth,
    #[error("chat {chat_id} is not a valid destination: {reason}")]
    Target { chat_id: String, reason: String },
    #[error("message delivery failed: {0}")]
    Transport(SendError),
}

/// Outbound message capability. Production uses [`TelegramClient`]; tests
/// inject a recording double.
#[async_trait]
pub trait BotTransport: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), SendError>;
}
