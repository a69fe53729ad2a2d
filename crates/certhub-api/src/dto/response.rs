//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use certhub_entity::account::Account;
use certhub_entity::organization::Organization;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// Content-derived account identifier.
    pub account_id: String,
    /// Identifier of the issued login code row.
    pub code_id: String,
}

/// Login-code issuance response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeIssuedResponse {
    /// Identifier of the issued login code row.
    pub code_id: String,
}

/// Successful verification response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Signed bearer token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The authenticated account.
    pub account: AccountResponse,
}

/// Account summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    /// Account id.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: String,
    /// Organization binding, if any.
    pub organization_id: Option<String>,
    /// Whether the account has completed a first login.
    pub active: bool,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            role: account.role.to_string(),
            organization_id: account.organization_id,
            active: account.active,
        }
    }
}

/// Organization summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResponse {
    /// Organization id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether an elevated member has completed a first login.
    pub active: bool,
    /// Enrollment time.
    pub created_at: DateTime<Utc>,
}

impl From<Organization> for OrganizationResponse {
    fn from(organization: Organization) -> Self {
        Self {
            id: organization.id,
            name: organization.name,
            active: organization.active,
            created_at: organization.created_at,
        }
    }
}
