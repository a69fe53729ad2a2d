//! Device-bound session lifecycle.
//!
//! At most one session exists per (account, device) pair: logging in again
//! from the same device supersedes the prior session. The session row is
//! the authority for expiry and binding — `check_session` never trusts the
//! token's copies for authorization decisions.

use std::sync::Arc;

use chrono::{Duration, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::info;

use certhub_core::config::session::SessionConfig;
use certhub_entity::session::Session;
use certhub_entity::signature::DeviceSignature;
use certhub_store::{AccountStore, SessionStore};

use crate::error::AuthError;
use crate::hasher;
use crate::identity::Identity;
use crate::token::Claims;

/// Manages creation, per-request validation, and invalidation of sessions.
#[derive(Clone)]
pub struct SessionManager {
    /// Session persistence.
    sessions: Arc<dyn SessionStore>,
    /// Account identity fields (existence check on every request).
    accounts: Arc<dyn AccountStore>,
    /// Absolute session lifetime in hours.
    ttl_hours: i64,
    /// Early-expiry grace window in minutes.
    grace_minutes: i64,
    /// Per-(account, device) critical sections for the supersession
    /// sequence: lookup → delete → insert must not interleave.
    binding_locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("ttl_hours", &self.ttl_hours)
            .field("grace_minutes", &self.grace_minutes)
            .finish()
    }
}

impl SessionManager {
    /// Create a new session manager.
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        accounts: Arc<dyn AccountStore>,
        config: &SessionConfig,
    ) -> Self {
        Self {
            sessions,
            accounts,
            ttl_hours: config.ttl_hours as i64,
            grace_minutes: config.expiry_grace_minutes as i64,
            binding_locks: Arc::new(DashMap::new()),
        }
    }

    /// Create a session for a verified identity, superseding any prior
    /// session for the same (account, device) pair.
    pub async fn new_session(
        &self,
        identity: &Identity,
        signature: &DeviceSignature,
    ) -> Result<Session, AuthError> {
        let lock = self
            .binding_locks
            .entry(binding_key(&identity.account_id, &identity.device_id))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();
        let _guard = lock.lock().await;

        if let Some(prior) = self
            .sessions
            .find_by_binding(&identity.account_id, &identity.device_id)
            .await?
        {
            info!(
                session_id = %prior.id,
                account_id = %identity.account_id,
                "Superseding existing session for device"
            );
            self.sessions.delete(&prior.id).await?;
        }

        let now = Utc::now();
        let expires_at = now + Duration::hours(self.ttl_hours);
        let session = Session {
            id: hasher::session_id(&identity.device_id, &identity.account_id, expires_at),
            account_id: identity.account_id.clone(),
            device_id: identity.device_id.clone(),
            organization_id: identity.organization_id.clone(),
            signature_hash: hasher::signature_hash(signature),
            created_at: now,
            expires_at,
        };
        self.sessions.insert(&session).await?;

        info!(
            session_id = %session.id,
            account_id = %identity.account_id,
            device_id = %identity.device_id,
            expires_at = %expires_at,
            "Session created"
        );

        Ok(session)
    }

    /// Validate the session a token points at. Called on every
    /// authenticated request.
    ///
    /// Sessions inside the grace window of their expiry are treated as
    /// already expired and removed, so in-flight requests never race a
    /// literal expiry. On success the stored session is returned — its
    /// fields, not the token's, feed authorization decisions.
    pub async fn check_session(&self, claims: &Claims) -> Result<Session, AuthError> {
        let session = self
            .sessions
            .get(&claims.ses)
            .await?
            .ok_or(AuthError::SessionExpired)?;

        if session.expires_within(Duration::minutes(self.grace_minutes)) {
            self.sessions.delete(&session.id).await?;
            info!(session_id = %session.id, "Expired session removed");
            return Err(AuthError::SessionExpired);
        }

        if session.device_id != claims.dev {
            return Err(AuthError::SessionMismatch);
        }

        if session.account_id != claims.sub {
            return Err(AuthError::AccountMismatch);
        }

        if let Some(organization_id) = &session.organization_id {
            if claims.org.as_deref() != Some(organization_id.as_str()) {
                return Err(AuthError::OrganizationMismatch);
            }
        }

        if !self.accounts.exists(&session.account_id).await? {
            return Err(AuthError::AccountNotFound);
        }

        Ok(session)
    }

    /// Invalidate a session (logout). Removing an absent session is not an
    /// error.
    pub async fn invalidate(&self, session_id: &str) -> Result<(), AuthError> {
        self.sessions.delete(session_id).await?;
        info!(session_id = %session_id, "Session invalidated");
        Ok(())
    }
}

/// Key for the per-binding critical section.
fn binding_key(account_id: &str, device_id: &str) -> String {
    format!("{account_id}:{device_id}")
}
