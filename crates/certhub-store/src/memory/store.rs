//! In-memory store implementation using dashmap.
//!
//! Unlike a cache, nothing here is ever evicted — rows live until the
//! identity core deletes them. Used for development and tests.

use async_trait::async_trait;
use dashmap::DashMap;

use certhub_core::error::AppError;
use certhub_core::result::AppResult;
use certhub_entity::account::Account;
use certhub_entity::code::AuthCode;
use certhub_entity::organization::Organization;
use certhub_entity::session::Session;

use crate::traits::{AccountStore, AuthCodeStore, OrganizationStore, SessionStore};

/// In-memory provider implementing all four store traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: DashMap<String, Account>,
    organizations: DashMap<String, Organization>,
    sessions: DashMap<String, Session>,
    codes: DashMap<String, AuthCode>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn get(&self, id: &str) -> AppResult<Option<Account>> {
        Ok(self.accounts.get(id).map(|e| e.value().clone()))
    }

    async fn exists(&self, id: &str) -> AppResult<bool> {
        Ok(self.accounts.contains_key(id))
    }

    async fn insert(&self, account: &Account) -> AppResult<()> {
        if self.accounts.contains_key(&account.id) {
            return Err(AppError::conflict(format!(
                "Account '{}' already exists",
                account.id
            )));
        }
        self.accounts.insert(account.id.clone(), account.clone());
        Ok(())
    }

    async fn update(&self, account: &Account) -> AppResult<()> {
        if !self.accounts.contains_key(&account.id) {
            return Err(AppError::not_found(format!(
                "Account '{}' not found",
                account.id
            )));
        }
        self.accounts.insert(account.id.clone(), account.clone());
        Ok(())
    }
}

#[async_trait]
impl OrganizationStore for MemoryStore {
    async fn get(&self, id: &str) -> AppResult<Option<Organization>> {
        Ok(self.organizations.get(id).map(|e| e.value().clone()))
    }

    async fn exists(&self, id: &str) -> AppResult<bool> {
        Ok(self.organizations.contains_key(id))
    }

    async fn insert(&self, organization: &Organization) -> AppResult<()> {
        if self.organizations.contains_key(&organization.id) {
            return Err(AppError::conflict(format!(
                "Organization '{}' already exists",
                organization.id
            )));
        }
        self.organizations
            .insert(organization.id.clone(), organization.clone());
        Ok(())
    }

    async fn update(&self, organization: &Organization) -> AppResult<()> {
        if !self.organizations.contains_key(&organization.id) {
            return Err(AppError::not_found(format!(
                "Organization '{}' not found",
                organization.id
            )));
        }
        self.organizations
            .insert(organization.id.clone(), organization.clone());
        Ok(())
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, id: &str) -> AppResult<Option<Session>> {
        Ok(self.sessions.get(id).map(|e| e.value().clone()))
    }

    async fn insert(&self, session: &Session) -> AppResult<()> {
        self.sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.sessions.remove(id);
        Ok(())
    }

    async fn find_by_binding(
        &self,
        account_id: &str,
        device_id: &str,
    ) -> AppResult<Option<Session>> {
        // Sessions are few per deployment; a scan is acceptable here the
        // same way pattern deletes scan the in-memory cache.
        Ok(self
            .sessions
            .iter()
            .find(|e| e.value().account_id == account_id && e.value().device_id == device_id)
            .map(|e| e.value().clone()))
    }
}

#[async_trait]
impl AuthCodeStore for MemoryStore {
    async fn get(&self, id: &str) -> AppResult<Option<AuthCode>> {
        Ok(self.codes.get(id).map(|e| e.value().clone()))
    }

    async fn upsert(&self, code: &AuthCode) -> AppResult<()> {
        self.codes.insert(code.id.clone(), code.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.codes.remove(id);
        Ok(())
    }
}
