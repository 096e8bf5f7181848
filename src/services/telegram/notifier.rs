use std::sync::Arc;

use crate::services::telegram::{BotTransport, NotifyError, SendError};

const PREVIEW_CHARS: usize = 40;

/// Notification sink over an injected bot transport. Classifies delivery
/// failures and logs a short preview of everything that went out.
pub struct Notifier {
    bot: Arc<dyn BotTransport>,
    chat_id: String,
}

impl Notifier {
    pub fn new(bot: Arc<dyn BotTransport>, chat_id: String) -> Self {
        Self { bot, chat_id }
    }

    /// Send one message to the configured chat. No internal retry; callers
    /// decide what a failed delivery means for them.
    pub async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        self.bot
            .send_message(&self.chat_id, text)
            .await
            .map_err(|e| match e {
                SendError::Unauthorized => NotifyError::Auth,
                SendError::BadRequest(reason) => NotifyError::Target {
                    chat_id: self.chat_id.clone(),
                    reason,
                },
                other => NotifyError::Transport(other),
            })?;

        tracing::info!("Message ({}) delivered", preview(text));
        Ok(())
    }
}

/// Log preview: at most [`PREVIEW_CHARS`] characters, ellipsis when cut
fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    }
}
