//! Homework review API client

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::error::Result;

/// Source of homework status responses
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetches status changes since `from_timestamp`
    ///
    /// # Arguments
    /// * `from_timestamp` - Lower bound of the query window (epoch seconds)
    ///
    /// # Returns
    /// The raw JSON body, not yet validated
    async fn fetch_statuses(&self, from_timestamp: i64) -> Result<Value>;
}

/// HTTP client for the homework review endpoint
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the homework statuses endpoint
    endpoint: String,
    /// OAuth token sent in the Authorization header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new review API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework statuses endpoint
    /// * `token` - OAuth token of the student account
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new review API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"***")
            .finish()
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch_statuses(&self, from_timestamp: i64) -> Result<Value> {
        let to_date = chrono::Utc::now().timestamp();
        debug!(
            "Requesting homework statuses from_date={} to_date={}",
            from_timestamp, to_date
        );

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_timestamp), ("to_date", to_date)])
            .send()
            .await?;

        crate::handle_json_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PracticumClient::new("http://localhost:8080/api/", "secret");
        assert_eq!(client.endpoint(), "http://localhost:8080/api/");
    }

    #[test]
    fn test_debug_masks_token() {
        let client = PracticumClient::new("http://localhost:8080/api/", "secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("***"));
    }
}
