//! HTTP mail-relay notifier.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, error};

use certhub_core::config::notify::NotifyConfig;
use certhub_core::error::AppError;
use certhub_core::result::AppResult;
use certhub_core::traits::Notifier;

/// Message payload posted to the relay endpoint.
#[derive(Debug, Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// Notifier that posts JSON messages to a configured mail relay.
#[derive(Debug, Clone)]
pub struct RelayNotifier {
    client: reqwest::Client,
    relay_url: String,
    sender: String,
}

impl RelayNotifier {
    /// Create a relay notifier from configuration.
    pub fn new(config: &NotifyConfig) -> AppResult<Self> {
        if config.relay_url.is_empty() {
            return Err(AppError::configuration(
                "notify.relay_url is required for the relay provider",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            relay_url: config.relay_url.clone(),
            sender: config.sender.clone(),
        })
    }
}

#[async_trait]
impl Notifier for RelayNotifier {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> AppResult<()> {
        let message = RelayMessage {
            from: &self.sender,
            to: recipient,
            subject,
            body,
        };

        let response = self
            .client
            .post(&self.relay_url)
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                error!(recipient, error = %e, "Mail relay request failed");
                AppError::external(format!("Mail relay request failed: {e}"))
            })?;

        if !response.status().is_success() {
            error!(recipient, status = %response.status(), "Mail relay rejected message");
            return Err(AppError::external(format!(
                "Mail relay rejected message with status {}",
                response.status()
            )));
        }

        debug!(recipient, subject, "Notification dispatched");
        Ok(())
    }
}
