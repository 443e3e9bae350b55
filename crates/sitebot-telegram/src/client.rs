//! Bot API HTTP client: long-poll getUpdates, sendMessage, and file
//! downloads.

use crate::types::{ApiEnvelope, TgFile, Update};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const API_BASE: &str = "https://api.telegram.org";

/// Long-poll window for getUpdates. The per-request timeout is padded past
/// this so the client does not cut the poll short.
const POLL_TIMEOUT_SECS: u64 = 50;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("bot api error: {description}")]
    Api { description: String },

    #[error("file has no downloadable path")]
    MissingFilePath,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<ApiError> for sitebot_core::Error {
    fn from(e: ApiError) -> Self {
        sitebot_core::Error::transport(e.to_string())
    }
}

pub struct BotApi {
    client: Client,
    base: String,
    file_base: String,
}

impl BotApi {
    pub fn new(token: &str) -> Self {
        Self {
            client: Client::new(),
            base: format!("{}/bot{}", API_BASE, token),
            file_base: format!("{}/file/bot{}", API_BASE, token),
        }
    }

    /// Fetch the next batch of updates at or after `offset`, blocking
    /// server-side up to the poll window.
    pub async fn get_updates(&self, offset: i64) -> ApiResult<Vec<Update>> {
        let body = serde_json::json!({
            "offset": offset,
            "timeout": POLL_TIMEOUT_SECS,
            "allowed_updates": ["message"],
        });
        let response = self
            .client
            .post(format!("{}/getUpdates", self.base))
            .timeout(Duration::from_secs(POLL_TIMEOUT_SECS + 10))
            .json(&body)
            .send()
            .await?;
        unwrap_envelope(response).await
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> ApiResult<()> {
        debug!(chat_id, len = text.len(), "sendMessage");
        let body = serde_json::json!({ "chat_id": chat_id, "text": text });
        let response = self
            .client
            .post(format!("{}/sendMessage", self.base))
            .json(&body)
            .send()
            .await?;
        unwrap_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }

    pub async fn get_file(&self, file_id: &str) -> ApiResult<TgFile> {
        let body = serde_json::json!({ "file_id": file_id });
        let response = self
            .client
            .post(format!("{}/getFile", self.base))
            .json(&body)
            .send()
            .await?;
        unwrap_envelope(response).await
    }

    /// Fetch the raw bytes behind a getFile result.
    pub async fn download(&self, file: &TgFile) -> ApiResult<Vec<u8>> {
        let path = file.file_path.as_deref().ok_or(ApiError::MissingFilePath)?;
        let response = self
            .client
            .get(format!("{}/{}", self.file_base, path))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

async fn unwrap_envelope<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();
    let text = response.text().await?;

    // Bot API errors come back as { ok: false, description } even on
    // non-2xx statuses, so parse the envelope before checking the status.
    match serde_json::from_str::<ApiEnvelope<T>>(&text) {
        Ok(envelope) if envelope.ok => envelope.result.ok_or(ApiError::Api {
            description: "response missing result".into(),
        }),
        Ok(envelope) => Err(ApiError::Api {
            description: envelope
                .description
                .unwrap_or_else(|| format!("status {}", status)),
        }),
        Err(_) => Err(ApiError::Api {
            description: format!("status {}: {}", status, text),
        }),
    }
}
