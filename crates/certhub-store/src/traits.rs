//! Store traits consumed by the identity core.
//!
//! The identity subsystem exclusively owns session and code rows; account
//! and organization schema ownership outside the identity fields belongs to
//! the CRUD layer, which is why those traits stop at get/exists/update.

use async_trait::async_trait;

use certhub_core::result::AppResult;
use certhub_entity::account::Account;
use certhub_entity::code::AuthCode;
use certhub_entity::organization::Organization;
use certhub_entity::session::Session;

/// Persistence operations for account identity fields.
#[async_trait]
pub trait AccountStore: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch an account by id.
    async fn get(&self, id: &str) -> AppResult<Option<Account>>;

    /// Check whether an account exists.
    async fn exists(&self, id: &str) -> AppResult<bool>;

    /// Insert a new account. Fails with `Conflict` if the id is taken.
    async fn insert(&self, account: &Account) -> AppResult<()>;

    /// Update an existing account's identity fields.
    async fn update(&self, account: &Account) -> AppResult<()>;
}

/// Persistence operations for organization identity fields.
#[async_trait]
pub trait OrganizationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch an organization by id.
    async fn get(&self, id: &str) -> AppResult<Option<Organization>>;

    /// Check whether an organization exists.
    async fn exists(&self, id: &str) -> AppResult<bool>;

    /// Insert a new organization. Fails with `Conflict` if the id is taken.
    async fn insert(&self, organization: &Organization) -> AppResult<()>;

    /// Update an existing organization's identity fields.
    async fn update(&self, organization: &Organization) -> AppResult<()>;
}

/// Persistence operations for device-bound sessions.
#[async_trait]
pub trait SessionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch a session by id.
    async fn get(&self, id: &str) -> AppResult<Option<Session>>;

    /// Insert a session row.
    async fn insert(&self, session: &Session) -> AppResult<()>;

    /// Delete a session row. Deleting an absent row is not an error.
    async fn delete(&self, id: &str) -> AppResult<()>;

    /// Find the session bound to an (account, device) pair, if any.
    async fn find_by_binding(&self, account_id: &str, device_id: &str)
    -> AppResult<Option<Session>>;
}

/// Persistence operations for one-time authentication codes.
#[async_trait]
pub trait AuthCodeStore: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch a code row by id.
    async fn get(&self, id: &str) -> AppResult<Option<AuthCode>>;

    /// Insert or replace the code row at its id.
    async fn upsert(&self, code: &AuthCode) -> AppResult<()>;

    /// Delete a code row. Deleting an absent row is not an error.
    async fn delete(&self, id: &str) -> AppResult<()>;
}
