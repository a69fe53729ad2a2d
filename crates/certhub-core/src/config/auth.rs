//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_token_secret")]
    pub token_secret: String,
    /// Issuer claim stamped into every token and required on verification.
    #[serde(default = "default_token_issuer")]
    pub token_issuer: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Length of the one-time login code sent to users.
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    /// Allow-list of hashed internal-organization identifiers whose members
    /// are granted cross-tenant administrative reach.
    #[serde(default)]
    pub internal_organizations: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: default_token_secret(),
            token_issuer: default_token_issuer(),
            token_ttl_minutes: default_token_ttl(),
            code_length: default_code_length(),
            internal_organizations: Vec::new(),
        }
    }
}

fn default_token_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_issuer() -> String {
    "certhub".to_string()
}

fn default_token_ttl() -> u64 {
    60
}

fn default_code_length() -> usize {
    8
}
