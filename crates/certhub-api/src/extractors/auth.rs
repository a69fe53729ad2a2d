//! `AuthSession` extractor — validates the bearer token, then the session.
//!
//! Token verification alone is never enough: the session row is the
//! authority, so every authenticated request runs `check_session` and the
//! resulting identity is built from stored fields, not token claims.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use certhub_auth::{AuthError, Identity};
use certhub_entity::session::Session;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated caller context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The caller's identity, built from the session and account rows.
    pub identity: Identity,
    /// The validated session.
    pub session: Session,
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.token_decoder.verify(token)?;
        let session = state.session_manager.check_session(&claims).await?;

        let account = state
            .stores
            .accounts
            .get(&session.account_id)
            .await
            .map_err(AuthError::from)?
            .ok_or(AuthError::AccountNotFound)?;

        let identity = Identity {
            account_id: session.account_id.clone(),
            role: account.role,
            organization_id: session
                .organization_id
                .clone()
                .or(account.organization_id),
            device_id: session.device_id.clone(),
        };

        Ok(Self { identity, session })
    }
}
