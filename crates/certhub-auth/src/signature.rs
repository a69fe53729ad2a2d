//! Device-signature header codec.
//!
//! The signature travels as a base64-encoded JSON object with exactly the
//! keys `uniqueId`, `userAgent`, and `ipAddress`. A missing or surplus key
//! invalidates the whole header. Pure parse/validate — no side effects.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use certhub_entity::signature::DeviceSignature;

use crate::error::AuthError;

/// Decodes and validates the device-signature request header.
#[derive(Debug, Clone, Copy)]
pub struct SignatureCodec;

impl SignatureCodec {
    /// Decode a header value into a [`DeviceSignature`].
    pub fn decode(header_value: &str) -> Result<DeviceSignature, AuthError> {
        let trimmed = header_value.trim();
        if trimmed.is_empty() {
            return Err(AuthError::InvalidSignature(
                "header value is empty".to_string(),
            ));
        }

        let bytes = STANDARD
            .decode(trimmed)
            .map_err(|e| AuthError::InvalidSignature(format!("not valid base64: {e}")))?;

        let signature: DeviceSignature = serde_json::from_slice(&bytes)
            .map_err(|e| AuthError::InvalidSignature(format!("payload rejected: {e}")))?;

        if signature.unique_id.is_empty() {
            return Err(AuthError::InvalidSignature(
                "uniqueId must not be empty".to_string(),
            ));
        }

        Ok(signature)
    }

    /// Validate a header value without keeping the decoded signature.
    pub fn validate(header_value: &str) -> Result<(), AuthError> {
        Self::decode(header_value).map(|_| ())
    }

    /// Encode a signature into its header representation.
    pub fn encode(signature: &DeviceSignature) -> Result<String, AuthError> {
        let json = serde_json::to_vec(signature)
            .map_err(|e| AuthError::InvalidSignature(format!("failed to serialize: {e}")))?;
        Ok(STANDARD.encode(json))
    }
}
