//! One-time code store backed by PostgreSQL.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use certhub_core::result::AppResult;
use certhub_entity::code::AuthCode;

use crate::traits::AuthCodeStore;

use super::with_timeout;

/// PostgreSQL implementation of [`AuthCodeStore`].
#[derive(Debug, Clone)]
pub struct PgAuthCodeStore {
    pool: PgPool,
    op_timeout: Duration,
}

impl PgAuthCodeStore {
    /// Create a new code store over the given pool.
    pub fn new(pool: PgPool, op_timeout: Duration) -> Self {
        Self { pool, op_timeout }
    }
}

#[async_trait]
impl AuthCodeStore for PgAuthCodeStore {
    async fn get(&self, id: &str) -> AppResult<Option<AuthCode>> {
        with_timeout(
            self.op_timeout,
            "Code lookup",
            sqlx::query_as::<_, AuthCode>("SELECT * FROM auth_codes WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn upsert(&self, code: &AuthCode) -> AppResult<()> {
        // Last writer wins on the device-derived id: a repeated request
        // simply refreshes the outstanding code.
        with_timeout(
            self.op_timeout,
            "Code upsert",
            sqlx::query(
                r#"INSERT INTO auth_codes
                   (id, device_id, account_id, user_agent, code, first_time, created_at)
                   VALUES ($1, $2, $3, $4, $5, $6, $7)
                   ON CONFLICT (id) DO UPDATE SET code = EXCLUDED.code"#,
            )
            .bind(&code.id)
            .bind(&code.device_id)
            .bind(&code.account_id)
            .bind(&code.user_agent)
            .bind(&code.code)
            .bind(code.first_time)
            .bind(code.created_at)
            .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        with_timeout(
            self.op_timeout,
            "Code delete",
            sqlx::query("DELETE FROM auth_codes WHERE id = $1")
                .bind(id)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }
}
