//! Identity-core error taxonomy.
//!
//! Each variant is a distinct, user-legible failure. None are retried by
//! this crate — retry policy belongs to the client. Transient persistence
//! failures arrive through the `App` variant and stay distinguishable from
//! the semantic failures around them.

use thiserror::Error;

use certhub_core::error::AppError;

/// Failures produced by the identity core.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The device signature header is malformed or incomplete.
    #[error("Invalid device signature: {0}")]
    InvalidSignature(String),

    /// No outstanding code exists for this device; the client must request
    /// a new one.
    #[error("No outstanding login code for this device")]
    CodeNotFound,

    /// The supplied code does not match the outstanding one. The code is
    /// kept, so the user may retry.
    #[error("The supplied login code does not match")]
    CodeMismatch,

    /// The session is missing or past its grace-adjusted expiry; the client
    /// must re-authenticate.
    #[error("Session has expired")]
    SessionExpired,

    /// The session is bound to a different device than the token claims.
    #[error("Session is bound to a different device")]
    SessionMismatch,

    /// The session belongs to a different account than the token claims.
    #[error("Session belongs to a different account")]
    AccountMismatch,

    /// The session is bound to a different organization than the token
    /// claims.
    #[error("Session is bound to a different organization")]
    OrganizationMismatch,

    /// The account bound to the session or code no longer exists.
    #[error("Account not found")]
    AccountNotFound,

    /// Authenticated but not authorized for the target resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Token signing failed.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(String),

    /// The presented token is absent, malformed, or failed verification.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A collaborating subsystem failed (persistence, validation,
    /// notification). Check `AppError::is_transient` for retryability.
    #[error(transparent)]
    App(#[from] AppError),
}

impl AuthError {
    /// Whether this failure is transient and the same request may be
    /// retried as-is.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::App(e) if e.is_transient())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_timeouts_are_transient() {
        let err = AuthError::from(AppError::timeout("session lookup"));
        assert!(err.is_transient());
        assert!(!AuthError::CodeMismatch.is_transient());
    }
}
