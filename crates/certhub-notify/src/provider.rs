//! Notifier provider selection.

use std::sync::Arc;

use tracing::info;

use certhub_core::config::notify::NotifyConfig;
use certhub_core::error::AppError;
use certhub_core::result::AppResult;
use certhub_core::traits::Notifier;

use crate::log::LogNotifier;
use crate::relay::RelayNotifier;

/// Build the configured notifier implementation.
pub fn build_notifier(config: &NotifyConfig) -> AppResult<Arc<dyn Notifier>> {
    match config.provider.as_str() {
        "log" => {
            info!("Initializing log notifier");
            Ok(Arc::new(LogNotifier::new()))
        }
        "relay" => {
            info!(relay_url = %config.relay_url, "Initializing mail-relay notifier");
            Ok(Arc::new(RelayNotifier::new(config)?))
        }
        other => Err(AppError::configuration(format!(
            "Unknown notify provider: '{other}'. Supported: log, relay"
        ))),
    }
}
