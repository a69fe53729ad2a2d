//! Account registration and login entry points.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use certhub_auth::error::AuthError;
use certhub_auth::hasher;
use certhub_auth::AuthCodeFlow;
use certhub_core::error::AppError;
use certhub_entity::account::{Account, AccountRole};
use certhub_entity::signature::DeviceSignature;
use certhub_store::{AccountStore, OrganizationStore};

/// Result of a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    /// The content-derived account identifier.
    pub account_id: String,
    /// Identifier of the issued login code row.
    pub code_id: String,
}

/// Manages account identity fields and the login-code entry points.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// Account identity fields.
    accounts: Arc<dyn AccountStore>,
    /// Organization identity fields.
    organizations: Arc<dyn OrganizationStore>,
    /// Login-code issuance.
    code_flow: Arc<AuthCodeFlow>,
}

impl AccountService {
    /// Create a new account service.
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        organizations: Arc<dyn OrganizationStore>,
        code_flow: Arc<AuthCodeFlow>,
    ) -> Self {
        Self {
            accounts,
            organizations,
            code_flow,
        }
    }

    /// Register a new account and issue its first login code.
    ///
    /// The identifier is derived from the email, so duplicate registration
    /// is a pure existence check. The account starts inactive; the code is
    /// issued with `first_time` set so that verifying it flips activation.
    pub async fn register(
        &self,
        email: &str,
        role: AccountRole,
        organization_id: Option<String>,
        signature: &DeviceSignature,
    ) -> Result<Registration, AuthError> {
        let email = email.trim().to_lowercase();
        let account_id = hasher::account_id(&email);

        if self.accounts.exists(&account_id).await? {
            return Err(AppError::conflict("An account already exists for this email").into());
        }

        if let Some(organization_id) = &organization_id {
            if !self.organizations.exists(organization_id).await? {
                return Err(AppError::not_found(format!(
                    "Organization '{organization_id}' is not enrolled"
                ))
                .into());
            }
        }

        let account = Account::new(account_id.clone(), email.clone(), role, organization_id)
            .map_err(AuthError::from)?;
        self.accounts.insert(&account).await?;

        info!(account_id = %account_id, role = %role, "Account registered");

        let code_id = self.code_flow.request_code(&email, signature, true).await?;

        Ok(Registration {
            account_id,
            code_id,
        })
    }

    /// Issue a login code for an existing account.
    pub async fn request_login_code(
        &self,
        email: &str,
        signature: &DeviceSignature,
    ) -> Result<String, AuthError> {
        let email = email.trim().to_lowercase();
        let account_id = hasher::account_id(&email);

        if !self.accounts.exists(&account_id).await? {
            return Err(AuthError::AccountNotFound);
        }

        self.code_flow.request_code(&email, signature, false).await
    }

    /// Fetch an account's identity fields.
    pub async fn profile(&self, account_id: &str) -> Result<Account, AuthError> {
        self.accounts
            .get(account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certhub_core::config::auth::AuthConfig;
    use certhub_core::error::ErrorKind;
    use certhub_notify::LogNotifier;
    use certhub_store::Stores;

    fn signature() -> DeviceSignature {
        DeviceSignature {
            unique_id: "dev-1".to_string(),
            user_agent: "test-agent".to_string(),
            ip_address: "10.0.0.1".to_string(),
        }
    }

    fn service() -> (AccountService, Stores) {
        let stores = Stores::memory();
        let code_flow = Arc::new(AuthCodeFlow::new(
            stores.codes.clone(),
            stores.accounts.clone(),
            stores.organizations.clone(),
            Arc::new(LogNotifier::new()),
            &AuthConfig::default(),
        ));
        let service = AccountService::new(
            stores.accounts.clone(),
            stores.organizations.clone(),
            code_flow,
        );
        (service, stores)
    }

    #[tokio::test]
    async fn test_register_derives_id_from_email() {
        let (service, stores) = service();
        let registration = service
            .register("A@B.Com", AccountRole::Member, None, &signature())
            .await
            .unwrap();

        assert_eq!(registration.account_id, hasher::account_id("a@b.com"));
        let account = stores
            .accounts
            .get(&registration.account_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(account.email, "a@b.com");
        assert!(!account.active);
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let (service, _) = service();
        service
            .register("a@b.com", AccountRole::Member, None, &signature())
            .await
            .unwrap();

        let err = service
            .register("a@b.com", AccountRole::Member, None, &signature())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::App(e) if e.kind == ErrorKind::Conflict));
    }

    #[tokio::test]
    async fn test_register_requires_enrolled_organization() {
        let (service, _) = service();
        let err = service
            .register(
                "a@b.com",
                AccountRole::Admin,
                Some("9".repeat(40)),
                &signature(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::App(e) if e.kind == ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_login_code_requires_existing_account() {
        let (service, _) = service();
        assert!(matches!(
            service.request_login_code("nobody@b.com", &signature()).await,
            Err(AuthError::AccountNotFound)
        ));
    }
}
