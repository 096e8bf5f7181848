use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum PracticumError {
    #[error("{url} answered with status {code}, expected 200")]
    StatusCode { code: u16, url: String },
    #[error("response body is not valid JSON: {0}")]
    NotJson(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Source of homework status changes since a given timestamp. The engine
/// only sees this capability, so tests can script the responses.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    async fn status_updates(&self, from_date: i64) -> Result<Value, PracticumError>;
}

/// Practicum homework-statuses API client
/// Handles all communication with the review service
pub struct PracticumClient {
    client: Client,
    token: String,
    endpoint: String,
}

impl PracticumClient {
    pub fn new(token: String, endpoint: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            token,
            endpoint,
        }
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    /// One windowed GET per call; retries are the caller's cycle, not ours
    async fn status_updates(&self, from_date: i64) -> Result<Value, PracticumError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| PracticumError::Network(e.to_string()))?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(PracticumError::StatusCode {
                code: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| PracticumError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| PracticumError::NotJson(e.to_string()))
    }
}
