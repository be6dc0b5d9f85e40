//! Telegram Bot API client
//!
//! Only `sendMessage` is needed: the bot writes plain text to one chat.
//! The bot token is part of the request URL, so transport errors are
//! stripped of their URL before they can reach a log line.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Capability to deliver a text notification
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Sends one plain-text message to the configured destination
    async fn send_message(&self, text: &str) -> Result<()>;
}

/// Body of a `sendMessage` call
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every Bot API response is wrapped in
#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    description: Option<String>,
}

/// HTTP client for the Telegram Bot API bound to a single chat
#[derive(Clone)]
pub struct TelegramClient {
    /// Bot API base URL (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot token issued by BotFather
    token: String,
    /// Destination chat identifier
    chat_id: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a client against a specific Bot API server with a custom HTTP client
    pub fn with_client(
        api_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            client,
        }
    }

    /// Get the Bot API base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Get the destination chat identifier
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("token", &"***")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[async_trait]
impl MessageSender for TelegramClient {
    async fn send_message(&self, text: &str) -> Result<()> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        // Bot API errors carry a description even on non-2xx statuses
        let parsed = serde_json::from_str::<BotApiResponse>(&body);

        if !status.is_success() {
            let message = parsed
                .ok()
                .and_then(|r| r.description)
                .unwrap_or(body);
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        let parsed = parsed.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse Bot API response: {}", e))
        })?;

        if !parsed.ok {
            return Err(ClientError::api_error(
                status.as_u16(),
                parsed
                    .description
                    .unwrap_or_else(|| "Bot API returned ok=false".to_string()),
            ));
        }

        debug!("Message delivered to chat {}", self.chat_id);
        Ok(())
    }
}
