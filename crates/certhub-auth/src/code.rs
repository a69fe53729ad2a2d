//! One-time login code issuance and verification.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tracing::{info, warn};

use certhub_core::config::auth::AuthConfig;
use certhub_core::traits::Notifier;
use certhub_entity::code::AuthCode;
use certhub_entity::signature::DeviceSignature;
use certhub_store::{AccountStore, AuthCodeStore, OrganizationStore};

use crate::error::AuthError;
use crate::hasher;
use crate::identity::Identity;

/// Characters a user may be asked to type back. Uppercase alphanumeric.
const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Issues, stores, and consumes one-time login codes.
#[derive(Clone)]
pub struct AuthCodeFlow {
    /// Code persistence.
    codes: Arc<dyn AuthCodeStore>,
    /// Account identity fields.
    accounts: Arc<dyn AccountStore>,
    /// Organization identity fields (activation on first elevated login).
    organizations: Arc<dyn OrganizationStore>,
    /// Out-of-band code delivery.
    notifier: Arc<dyn Notifier>,
    /// Length of generated codes.
    code_length: usize,
}

impl std::fmt::Debug for AuthCodeFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthCodeFlow")
            .field("code_length", &self.code_length)
            .finish()
    }
}

impl AuthCodeFlow {
    /// Create a new code flow with all required collaborators.
    pub fn new(
        codes: Arc<dyn AuthCodeStore>,
        accounts: Arc<dyn AccountStore>,
        organizations: Arc<dyn OrganizationStore>,
        notifier: Arc<dyn Notifier>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            codes,
            accounts,
            organizations,
            notifier,
            code_length: config.code_length,
        }
    }

    /// Issue a login code for the given email and device signature.
    ///
    /// Callers confirm the account exists before calling this; `first_time`
    /// is true only immediately after account creation. If a code is
    /// already outstanding for this device, only its code value is
    /// refreshed — last writer wins. Returns the code row id.
    pub async fn request_code(
        &self,
        email: &str,
        signature: &DeviceSignature,
        first_time: bool,
    ) -> Result<String, AuthError> {
        let id = hasher::code_id(&signature.user_agent, &signature.unique_id);
        let code = generate_code(self.code_length);

        let row = match self.codes.get(&id).await? {
            Some(mut existing) => {
                existing.refresh(code.clone());
                existing
            }
            None => AuthCode {
                id: id.clone(),
                device_id: signature.unique_id.clone(),
                account_id: hasher::account_id(email),
                user_agent: signature.user_agent.clone(),
                code: code.clone(),
                first_time,
                created_at: Utc::now(),
            },
        };
        self.codes.upsert(&row).await?;

        info!(code_id = %id, first_time, "Login code issued");

        // Dispatch is fire-once: failures are surfaced, never retried here.
        self.notifier
            .send(
                email,
                "Your CertHub login code",
                &format!("Your one-time login code is: {code}"),
            )
            .await
            .map_err(|e| {
                warn!(code_id = %id, error = %e, "Login code dispatch failed");
                e
            })?;

        Ok(id)
    }

    /// Consume an outstanding code and establish the caller's identity.
    ///
    /// The code is single-use: it is destroyed on success and kept on
    /// mismatch so the user may retry. A first-time verification activates
    /// the account, and — for elevated roles — its organization.
    pub async fn verify_code(
        &self,
        signature: &DeviceSignature,
        supplied: &str,
    ) -> Result<Identity, AuthError> {
        let id = hasher::code_id(&signature.user_agent, &signature.unique_id);

        let row = self.codes.get(&id).await?.ok_or(AuthError::CodeNotFound)?;

        if row.code != supplied.trim() {
            warn!(code_id = %id, "Login code mismatch");
            return Err(AuthError::CodeMismatch);
        }

        self.codes.delete(&id).await?;

        let mut account = self
            .accounts
            .get(&row.account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if row.first_time {
            account.activate();
            self.accounts.update(&account).await?;
            info!(account_id = %account.id, "Account activated on first login");

            if account.role.is_elevated() {
                if let Some(org_id) = &account.organization_id {
                    if let Some(mut organization) = self.organizations.get(org_id).await? {
                        if !organization.active {
                            organization.activate();
                            self.organizations.update(&organization).await?;
                            info!(organization_id = %org_id, "Organization activated");
                        }
                    }
                }
            }
        }

        info!(account_id = %account.id, device_id = %row.device_id, "Login code verified");

        Ok(Identity {
            account_id: account.id,
            role: account.role,
            organization_id: account.organization_id,
            device_id: row.device_id,
        })
    }
}

/// Generate a random human-enterable code of the given length.
fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CODE_CHARSET[rng.random_range(0..CODE_CHARSET.len())] as char)
        .collect()
}
