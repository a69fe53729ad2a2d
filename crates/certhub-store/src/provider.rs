//! Store provider selection.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use certhub_core::config::store::StoreConfig;
use certhub_core::error::AppError;
use certhub_core::result::AppResult;

use crate::memory::MemoryStore;
use crate::postgres::{
    DatabasePool, PgAccountStore, PgAuthCodeStore, PgOrganizationStore, PgSessionStore,
    ensure_schema,
};
use crate::traits::{AccountStore, AuthCodeStore, OrganizationStore, SessionStore};

/// The four store handles the identity core consumes.
///
/// The provider behind them is selected at construction time based on
/// configuration and never changes for the process lifetime.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Account identity fields.
    pub accounts: Arc<dyn AccountStore>,
    /// Organization identity fields.
    pub organizations: Arc<dyn OrganizationStore>,
    /// Device-bound sessions.
    pub sessions: Arc<dyn SessionStore>,
    /// One-time authentication codes.
    pub codes: Arc<dyn AuthCodeStore>,
}

impl Stores {
    /// Create stores from configuration.
    pub async fn connect(config: &StoreConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "memory" => {
                info!("Initializing in-memory store provider");
                Ok(Self::memory())
            }
            "postgres" => {
                info!("Initializing PostgreSQL store provider");
                let db = DatabasePool::connect(config).await?;
                ensure_schema(db.pool()).await?;

                let pool = db.pool().clone();
                let op_timeout = Duration::from_secs(config.op_timeout_seconds);
                Ok(Self {
                    accounts: Arc::new(PgAccountStore::new(pool.clone(), op_timeout)),
                    organizations: Arc::new(PgOrganizationStore::new(pool.clone(), op_timeout)),
                    sessions: Arc::new(PgSessionStore::new(pool.clone(), op_timeout)),
                    codes: Arc::new(PgAuthCodeStore::new(pool, op_timeout)),
                })
            }
            other => Err(AppError::configuration(format!(
                "Unknown store provider: '{other}'. Supported: memory, postgres"
            ))),
        }
    }

    /// Create stores over a fresh in-memory provider (for tests and dev).
    pub fn memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            accounts: store.clone(),
            organizations: store.clone(),
            sessions: store.clone(),
            codes: store,
        }
    }
}
