//! Review Bot HTTP Clients
//!
//! Thin, typed HTTP clients for the two remotes the bot talks to:
//! - [`PracticumClient`]: the homework review API (polled for status changes)
//! - [`TelegramClient`]: the Telegram Bot API (where notifications go)
//!
//! Each client is also exposed through a small capability trait
//! ([`HomeworkSource`], [`MessageSender`]) so the runner can be exercised
//! against fakes.
//!
//! # Example
//!
//! ```no_run
//! use reviewbot_client::{HomeworkSource, PracticumClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "token",
//!     );
//!
//!     let body = client.fetch_statuses(0).await?;
//!     println!("{}", body);
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::{HomeworkSource, PracticumClient};
pub use telegram::{MessageSender, TelegramClient};

use serde_json::Value;

// =============================================================================
// Response Handlers
// =============================================================================

/// Check the status code and parse the body as JSON
///
/// The status is checked explicitly: reqwest does not treat 4xx/5xx as
/// errors on its own.
async fn handle_json_response(response: reqwest::Response) -> Result<Value> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}
