//! Notification dispatch configuration.

use serde::{Deserialize, Serialize};

/// Notification dispatch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Notifier provider: `"log"` or `"relay"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Mail relay endpoint URL (relay provider only).
    #[serde(default)]
    pub relay_url: String,
    /// Sender address stamped on outgoing messages.
    #[serde(default = "default_sender")]
    pub sender: String,
    /// Dispatch timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            relay_url: String::new(),
            sender: default_sender(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_provider() -> String {
    "log".to_string()
}

fn default_sender() -> String {
    "no-reply@certhub.local".to_string()
}

fn default_timeout() -> u64 {
    10
}
