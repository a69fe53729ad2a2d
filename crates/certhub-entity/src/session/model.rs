//! Session entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A device-bound login session.
///
/// At most one session exists per (account, device) pair — creating a new
/// one supersedes any prior session for that pair. The session row, not the
/// token, is the authority for expiry and binding on every request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Content-derived identifier: hash of (device, account, expiry).
    pub id: String,
    /// The account this session belongs to.
    pub account_id: String,
    /// The device the session is bound to (signature `uniqueId`).
    pub device_id: String,
    /// Organization binding inherited from the account at login, if any.
    pub organization_id: Option<String>,
    /// Correlation hash of the device signature that opened the session.
    pub signature_hash: String,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the session expires within the given grace window.
    ///
    /// Sessions are treated as expired slightly before their literal expiry
    /// to avoid races with in-flight requests.
    pub fn expires_within(&self, grace: Duration) -> bool {
        self.expires_at <= Utc::now() + grace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(expires_at: DateTime<Utc>) -> Session {
        Session {
            id: "s".repeat(40),
            account_id: "a".repeat(40),
            device_id: "device-1".to_string(),
            organization_id: None,
            signature_hash: "f".repeat(40),
            created_at: Utc::now(),
            expires_at,
        }
    }

    #[test]
    fn test_fresh_session_outside_grace() {
        let s = session(Utc::now() + Duration::hours(2));
        assert!(!s.expires_within(Duration::minutes(5)));
    }

    #[test]
    fn test_near_expiry_inside_grace() {
        let s = session(Utc::now() + Duration::minutes(2));
        assert!(s.expires_within(Duration::minutes(5)));
    }

    #[test]
    fn test_past_expiry_inside_grace() {
        let s = session(Utc::now() - Duration::minutes(1));
        assert!(s.expires_within(Duration::minutes(5)));
    }
}
