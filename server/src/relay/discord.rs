//! Discord Incoming-Webhook Client
//!
//! Posts composed messages to the configured Discord webhook URL. The call
//! is awaited and checked; failures surface to the inbound caller instead of
//! being dropped.

use std::time::Duration;

use tracing::debug;

use super::error::RelayError;
use super::message::WebhookMessage;

/// Outbound request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for a single Discord incoming webhook.
#[derive(Debug, Clone)]
pub struct DiscordClient {
    http: reqwest::Client,
    webhook_url: String,
}

impl DiscordClient {
    /// Build a client for the given webhook URL.
    pub fn new(webhook_url: String) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, webhook_url })
    }

    /// Send one message. A connect error or non-2xx answer from Discord maps
    /// into the relay error taxonomy; there are no retries.
    pub async fn send(&self, message: &WebhookMessage) -> Result<(), RelayError> {
        let start = std::time::Instant::now();
        let response = self
            .http
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        debug!(
            status = status.as_u16(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Discord webhook call finished"
        );

        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::DiscordStatus(status.as_u16()))
        }
    }
}
