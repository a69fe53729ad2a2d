//! Account store backed by PostgreSQL.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use certhub_core::result::AppResult;
use certhub_entity::account::Account;

use crate::traits::AccountStore;

use super::with_timeout;

/// PostgreSQL implementation of [`AccountStore`].
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: PgPool,
    op_timeout: Duration,
}

impl PgAccountStore {
    /// Create a new account store over the given pool.
    pub fn new(pool: PgPool, op_timeout: Duration) -> Self {
        Self { pool, op_timeout }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn get(&self, id: &str) -> AppResult<Option<Account>> {
        with_timeout(
            self.op_timeout,
            "Account lookup",
            sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn exists(&self, id: &str) -> AppResult<bool> {
        with_timeout(
            self.op_timeout,
            "Account existence check",
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM accounts WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool),
        )
        .await
    }

    async fn insert(&self, account: &Account) -> AppResult<()> {
        with_timeout(
            self.op_timeout,
            "Account insert",
            sqlx::query(
                r#"INSERT INTO accounts
                   (id, email, role, organization_id, active, created_at, updated_at)
                   VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
            )
            .bind(&account.id)
            .bind(&account.email)
            .bind(account.role.as_str())
            .bind(&account.organization_id)
            .bind(account.active)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn update(&self, account: &Account) -> AppResult<()> {
        with_timeout(
            self.op_timeout,
            "Account update",
            sqlx::query(
                r#"UPDATE accounts
                   SET email = $2, role = $3, organization_id = $4, active = $5, updated_at = $6
                   WHERE id = $1"#,
            )
            .bind(&account.id)
            .bind(&account.email)
            .bind(account.role.as_str())
            .bind(&account.organization_id)
            .bind(account.active)
            .bind(account.updated_at)
            .execute(&self.pool),
        )
        .await?;
        Ok(())
    }
}
