use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::services::telegram::{BotTransport, SendError};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Telegram Bot API client
pub struct TelegramClient {
    client: Client,
    token: String,
}

/// Error envelope the Bot API returns alongside non-2xx statuses
#[derive(Deserialize)]
struct ApiReply {
    description: Option<String>,
}

impl TelegramClient {
    pub fn new(token: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            token,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", TELEGRAM_API_BASE, self.token, method)
    }
}

#[async_trait]
impl BotTransport for TelegramClient {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), SendError> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let description = response
            .json::<ApiReply>()
            .await
            .ok()
            .and_then(|reply| reply.description)
            .unwrap_or_else(|| "no description".to_string());

        // 401/403 mean the bot credential itself is bad; 400 is what the Bot
        // API answers for an unknown or inaccessible chat_id
        match status.as_u16() {
            401 | 403 => Err(SendError::Unauthorized),
            400 => Err(SendError::BadRequest(description)),
            code => Err(SendError::Api { code, description }),
        }
    }
}
