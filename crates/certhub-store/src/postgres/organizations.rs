//! Organization store backed by PostgreSQL.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use certhub_core::result::AppResult;
use certhub_entity::organization::Organization;

use crate::traits::OrganizationStore;

use super::with_timeout;

/// PostgreSQL implementation of [`OrganizationStore`].
#[derive(Debug, Clone)]
pub struct PgOrganizationStore {
    pool: PgPool,
    op_timeout: Duration,
}

impl PgOrganizationStore {
    /// Create a new organization store over the given pool.
    pub fn new(pool: PgPool, op_timeout: Duration) -> Self {
        Self { pool, op_timeout }
    }
}

#[async_trait]
impl OrganizationStore for PgOrganizationStore {
    async fn get(&self, id: &str) -> AppResult<Option<Organization>> {
        with_timeout(
            self.op_timeout,
            "Organization lookup",
            sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn exists(&self, id: &str) -> AppResult<bool> {
        with_timeout(
            self.op_timeout,
            "Organization existence check",
            sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM organizations WHERE id = $1)",
            )
            .bind(id)
            .fetch_one(&self.pool),
        )
        .await
    }

    async fn insert(&self, organization: &Organization) -> AppResult<()> {
        with_timeout(
            self.op_timeout,
            "Organization insert",
            sqlx::query(
                r#"INSERT INTO organizations (id, name, active, created_at)
                   VALUES ($1, $2, $3, $4)"#,
            )
            .bind(&organization.id)
            .bind(&organization.name)
            .bind(organization.active)
            .bind(organization.created_at)
            .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn update(&self, organization: &Organization) -> AppResult<()> {
        with_timeout(
            self.op_timeout,
            "Organization update",
            sqlx::query(
                r#"UPDATE organizations SET name = $2, active = $3 WHERE id = $1"#,
            )
            .bind(&organization.id)
            .bind(&organization.name)
            .bind(organization.active)
            .execute(&self.pool),
        )
        .await?;
        Ok(())
    }
}
