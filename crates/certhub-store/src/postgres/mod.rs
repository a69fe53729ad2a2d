//! PostgreSQL store provider.

pub mod accounts;
pub mod codes;
pub mod connection;
pub mod organizations;
pub mod sessions;

use std::future::Future;
use std::time::Duration;

use sqlx::PgPool;
use tracing::info;

use certhub_core::error::{AppError, ErrorKind};
use certhub_core::result::AppResult;

pub use accounts::PgAccountStore;
pub use codes::PgAuthCodeStore;
pub use connection::DatabasePool;
pub use organizations::PgOrganizationStore;
pub use sessions::PgSessionStore;

/// Run a store operation under a deadline.
///
/// An elapsed deadline surfaces as `ErrorKind::Timeout` so callers can tell
/// transient failures apart from semantic ones.
pub(crate) async fn with_timeout<T, F>(deadline: Duration, what: &str, fut: F) -> AppResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(AppError::with_source(
            ErrorKind::Store,
            format!("{what} failed: {e}"),
            e,
        )),
        Err(_) => Err(AppError::new(
            ErrorKind::Timeout,
            format!("{what} exceeded the {}s store deadline", deadline.as_secs()),
        )),
    }
}

/// Create the identity tables if they do not exist yet.
///
/// Schema ownership of accounts/organizations outside the identity fields
/// belongs to the CRUD layer; these statements only bootstrap what the
/// identity core reads and writes.
pub async fn ensure_schema(pool: &PgPool) -> AppResult<()> {
    info!("Ensuring identity schema");

    let statements = [
        r#"CREATE TABLE IF NOT EXISTS accounts (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            role TEXT NOT NULL,
            organization_id TEXT,
            active BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )"#,
        r#"CREATE TABLE IF NOT EXISTS organizations (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            active BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL
        )"#,
        r#"CREATE TABLE IF NOT EXISTS sessions (
            id TEXT PRIMARY KEY,
            account_id TEXT NOT NULL,
            device_id TEXT NOT NULL,
            organization_id TEXT,
            signature_hash TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL,
            expires_at TIMESTAMPTZ NOT NULL
        )"#,
        r#"CREATE INDEX IF NOT EXISTS sessions_binding_idx
            ON sessions (account_id, device_id)"#,
        r#"CREATE TABLE IF NOT EXISTS auth_codes (
            id TEXT PRIMARY KEY,
            device_id TEXT NOT NULL,
            account_id TEXT NOT NULL,
            user_agent TEXT NOT NULL,
            code TEXT NOT NULL,
            first_time BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL
        )"#,
    ];

    for statement in statements {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Store, format!("Schema bootstrap failed: {e}"), e)
        })?;
    }

    Ok(())
}
