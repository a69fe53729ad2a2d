//! One-time authentication code model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An outstanding one-time login code.
///
/// Keyed by a hash of the device signature, so at most one code is
/// outstanding per device — a repeated request overwrites the code value in
/// place. The row is destroyed on successful verification.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuthCode {
    /// Content-derived identifier: hash of (userAgent, uniqueId).
    pub id: String,
    /// The device the code was requested from (signature `uniqueId`).
    pub device_id: String,
    /// The account the code will log in.
    pub account_id: String,
    /// User-Agent of the requesting device, kept for correlation.
    pub user_agent: String,
    /// The human-enterable code value (uppercase alphanumeric).
    pub code: String,
    /// Whether consuming this code also flips activation flags.
    pub first_time: bool,
    /// When the code row was first created.
    pub created_at: DateTime<Utc>,
}

impl AuthCode {
    /// Replace the outstanding code value, keeping the original binding.
    pub fn refresh(&mut self, code: String) {
        self.code = code;
    }
}
