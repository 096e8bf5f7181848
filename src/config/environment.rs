use std::env;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub poll_interval_secs: u64,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let practicum_token = env::var("PRACTICUM_TOKEN")
            .map_err(|_| "PRACTICUM_TOKEN must be set".to_string())?;

        let telegram_token = env::var("TELEGRAM_TOKEN")
            .map_err(|_| "TELEGRAM_TOKEN must be set".to_string())?;

        let telegram_chat_id = env::var("TELEGRAM_CHAT_ID")
            .map_err(|_| "TELEGRAM_CHAT_ID must be set".to_string())?;

        let endpoint =
            env::var("PRACTICUM_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let poll_interval_secs = match env::var("POLL_INTERVAL_SECS") {
            Ok(val) => val
                .parse()
                .map_err(|e| format!("Invalid POLL_INTERVAL_SECS: {}", e))?,
            Err(_) => DEFAULT_POLL_INTERVAL_SECS,
        };

        let http_timeout_secs = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(val) => val
                .parse()
                .map_err(|e| format!("Invalid HTTP_TIMEOUT_SECS: {}", e))?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            poll_interval_secs,
            http_timeout_secs,
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Request timeout for outbound HTTP calls
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
