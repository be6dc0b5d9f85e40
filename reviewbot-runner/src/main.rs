//! Review Bot Runner
//!
//! Watches the homework review API and reports status changes to Telegram.
//!
//! Architecture:
//! - Configuration: credentials and tunables from the environment (and `.env`)
//! - Clients: HTTP access to the review API and the Bot API (`reviewbot-client`)
//! - Services: rendering and deduplicating notifications
//! - Scheduler: the interval-driven poll loop
//!
//! Missing credentials stop the process before any request is made. Every
//! other failure is logged and the next cycle runs as scheduled.

mod config;
mod error;
mod scheduler;
mod service;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use reviewbot_client::{PracticumClient, TelegramClient};
use reviewbot_core::domain::PollWindow;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::scheduler::HomeworkPoller;
use crate::service::StatusNotifier;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env first so RUST_LOG from it reaches the filter
    let dotenv = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reviewbot_runner=info,reviewbot_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Review Bot");

    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    // Load configuration
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Fatal configuration error: {:#}", e);
            return Err(e);
        }
    };
    info!(
        "Loaded configuration: retry_period={:?}, request_timeout={:?}",
        config.retry_period, config.request_timeout
    );

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let source = Arc::new(PracticumClient::with_client(
        config.practicum_endpoint.clone(),
        config.credentials.practicum_token.clone(),
        http.clone(),
    ));
    let sender = Arc::new(TelegramClient::with_client(
        config.telegram_api_url.clone(),
        config.credentials.telegram_token.clone(),
        config.credentials.telegram_chat_id.clone(),
        http,
    ));

    info!(
        "Clients initialized: endpoint={}, bot_api={}, chat_id={}",
        source.endpoint(),
        sender.api_url(),
        sender.chat_id()
    );

    let mut poller = HomeworkPoller::new(
        config.retry_period,
        source,
        StatusNotifier::new(sender),
        PollWindow::starting_now(),
    );

    poller.run_until(shutdown_signal()).await;

    info!(
        "Review Bot stopped (cursor at {})",
        poller.window().from_timestamp()
    );
    Ok(())
}

/// Loads and validates configuration from environment variables
fn load_config() -> Result<Config> {
    let config = Config::from_env().context("Cannot start without credentials")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Resolves on Ctrl-C; never resolves if the handler cannot be installed
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
