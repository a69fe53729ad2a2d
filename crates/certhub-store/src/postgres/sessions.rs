//! Session store backed by PostgreSQL.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use certhub_core::result::AppResult;
use certhub_entity::session::Session;

use crate::traits::SessionStore;

use super::with_timeout;

/// PostgreSQL implementation of [`SessionStore`].
#[derive(Debug, Clone)]
pub struct PgSessionStore {
    pool: PgPool,
    op_timeout: Duration,
}

impl PgSessionStore {
    /// Create a new session store over the given pool.
    pub fn new(pool: PgPool, op_timeout: Duration) -> Self {
        Self { pool, op_timeout }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn get(&self, id: &str) -> AppResult<Option<Session>> {
        with_timeout(
            self.op_timeout,
            "Session lookup",
            sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn insert(&self, session: &Session) -> AppResult<()> {
        with_timeout(
            self.op_timeout,
            "Session insert",
            sqlx::query(
                r#"INSERT INTO sessions
                   (id, account_id, device_id, organization_id, signature_hash, created_at, expires_at)
                   VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
            )
            .bind(&session.id)
            .bind(&session.account_id)
            .bind(&session.device_id)
            .bind(&session.organization_id)
            .bind(&session.signature_hash)
            .bind(session.created_at)
            .bind(session.expires_at)
            .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        with_timeout(
            self.op_timeout,
            "Session delete",
            sqlx::query("DELETE FROM sessions WHERE id = $1")
                .bind(id)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn find_by_binding(
        &self,
        account_id: &str,
        device_id: &str,
    ) -> AppResult<Option<Session>> {
        with_timeout(
            self.op_timeout,
            "Session binding lookup",
            sqlx::query_as::<_, Session>(
                "SELECT * FROM sessions WHERE account_id = $1 AND device_id = $2 LIMIT 1",
            )
            .bind(account_id)
            .bind(device_id)
            .fetch_optional(&self.pool),
        )
        .await
    }
}
