//! Request DTOs with validation.
//!
//! The wire format is camelCase throughout, matching the device-signature
//! header payload.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Account registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Email address to register.
    #[validate(email(message = "A valid email address is required"))]
    pub email_address: String,
    /// Requested role; defaults to `member`.
    #[serde(default)]
    pub role: Option<String>,
    /// Organization to bind the account to.
    #[serde(default)]
    pub organization_id: Option<String>,
}

/// Login-code request body for a returning user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RequestCodeRequest {
    /// Email address of the existing account.
    #[validate(email(message = "A valid email address is required"))]
    pub email_address: String,
}

/// Organization enrollment request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnrollOrganizationRequest {
    /// Externally supplied 40-hex organization identifier.
    #[validate(length(equal = 40, message = "Organization id must be 40 hex characters"))]
    pub id: String,
    /// Display name.
    #[validate(length(min = 1, message = "Organization name is required"))]
    pub name: String,
}
