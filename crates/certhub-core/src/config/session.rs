//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Absolute session lifetime in hours.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
    /// Grace window in minutes: sessions are treated as expired this far
    /// before their literal expiry to avoid races with in-flight requests.
    #[serde(default = "default_expiry_grace")]
    pub expiry_grace_minutes: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
            expiry_grace_minutes: default_expiry_grace(),
        }
    }
}

fn default_ttl_hours() -> u64 {
    12
}

fn default_expiry_grace() -> u64 {
    5
}
