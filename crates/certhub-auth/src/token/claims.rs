//! Token claims payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use certhub_entity::account::AccountRole;

/// Claims embedded in every access token.
///
/// The token is stateless: `ses` is a pointer to the session row, which
/// remains the source of truth for expiry and binding. The other fields are
/// convenience copies, never authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer.
    pub iss: String,
    /// Subject — the account id.
    pub sub: String,
    /// Session id this token points at.
    pub ses: String,
    /// Organization binding, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    /// Device id the session is bound to.
    pub dev: String,
    /// Account role at issuance time.
    pub role: AccountRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
