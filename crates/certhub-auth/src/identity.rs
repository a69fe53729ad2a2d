//! Verified identity record.

use serde::{Deserialize, Serialize};

use certhub_entity::account::AccountRole;

/// The identity established by a successful code verification, and carried
/// through session creation, token issuance, and permission checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Content-derived account identifier.
    pub account_id: String,
    /// Account role at verification time.
    pub role: AccountRole,
    /// Organization the account belongs to, if any.
    pub organization_id: Option<String>,
    /// The device this identity was established from.
    pub device_id: String,
}
