//! Token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use certhub_core::config::auth::AuthConfig;

use crate::error::AuthError;

use super::claims::Claims;

/// Validates signed bearer tokens.
///
/// Signature and expiry verification are necessary but not sufficient: the
/// session the token points at must still be checked afterwards, because
/// the token alone cannot reflect server-side session invalidation.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew
        validation.set_issuer(&[&config.token_issuer]);

        Self {
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            validation,
        }
    }

    /// Decode and validate a bearer token string.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::Unauthorized("token is missing".to_string()));
        }

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AuthError::Unauthorized("token has expired".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AuthError::Unauthorized("invalid token format".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AuthError::Unauthorized("invalid token signature".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                        AuthError::Unauthorized("invalid token issuer".to_string())
                    }
                    _ => AuthError::Unauthorized(format!("token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}
