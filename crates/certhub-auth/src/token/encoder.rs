//! Token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use certhub_core::config::auth::AuthConfig;

use crate::error::AuthError;
use crate::identity::Identity;

use super::claims::Claims;

/// Creates signed access tokens.
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Issuer stamped into every token.
    issuer: String,
    /// Token TTL in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("issuer", &self.issuer)
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

/// Result of a successful token generation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SignedToken {
    /// The signed bearer token.
    pub token: String,
    /// Token expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            issuer: config.token_issuer.clone(),
            ttl_minutes: config.token_ttl_minutes as i64,
        }
    }

    /// Serialize a validated identity and its session pointer into a signed
    /// token.
    pub fn generate(
        &self,
        identity: &Identity,
        session_id: &str,
    ) -> Result<SignedToken, AuthError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::minutes(self.ttl_minutes);

        let claims = Claims {
            iss: self.issuer.clone(),
            sub: identity.account_id.clone(),
            ses: session_id.to_string(),
            org: identity.organization_id.clone(),
            dev: identity.device_id.clone(),
            role: identity.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenEncoding(e.to_string()))?;

        Ok(SignedToken { token, expires_at })
    }
}
