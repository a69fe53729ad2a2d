//! Log-only notifier for development and tests.

use async_trait::async_trait;
use tracing::info;

use certhub_core::result::AppResult;
use certhub_core::traits::Notifier;

/// Notifier that writes messages to the log instead of delivering them.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Create a new log notifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> AppResult<()> {
        info!(recipient, subject, body, "Notification (log only)");
        Ok(())
    }
}
