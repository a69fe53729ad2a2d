//! Device-signature header extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use certhub_auth::{AuthError, SignatureCodec};
use certhub_entity::signature::DeviceSignature;

use crate::error::ApiError;

/// Request header carrying the base64-encoded device signature.
pub const DEVICE_SIGNATURE_HEADER: &str = "x-device-signature";

/// Extracted device signature, required on code-request and verification
/// calls.
#[derive(Debug, Clone)]
pub struct SignatureHeader(pub DeviceSignature);

impl<S> FromRequestParts<S> for SignatureHeader
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(DEVICE_SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                ApiError::from(AuthError::InvalidSignature(
                    "device signature header is missing".to_string(),
                ))
            })?;

        let signature = SignatureCodec::decode(value)?;
        Ok(Self(signature))
    }
}
