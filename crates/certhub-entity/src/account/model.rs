//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use certhub_core::error::AppError;

use crate::ident::validate_identifier;

use super::role::AccountRole;

/// A registered account.
///
/// The identifier is content-derived — the same email always yields the
/// same id — which makes lookups idempotent and duplicate registration a
/// pure existence check. Accounts start inactive and are activated by the
/// first successful code verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Content-derived identifier (hash of the lowercased email).
    pub id: String,
    /// Normalized (lowercased) email address.
    pub email: String,
    /// Account role.
    pub role: AccountRole,
    /// Organization the account belongs to, if any.
    pub organization_id: Option<String>,
    /// Whether the account has completed its first login.
    pub active: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new, inactive account with a pre-derived identifier.
    ///
    /// The id and any organization binding are validated as 40-hex
    /// identifiers; the email must already be normalized by the caller.
    pub fn new(
        id: String,
        email: String,
        role: AccountRole,
        organization_id: Option<String>,
    ) -> Result<Self, AppError> {
        validate_identifier(&id)?;
        if let Some(org) = &organization_id {
            validate_identifier(org)?;
        }
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::validation("A valid email address is required"));
        }
        let now = Utc::now();
        Ok(Self {
            id,
            email,
            role,
            organization_id,
            active: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Mark the account active (first successful login).
    pub fn activate(&mut self) {
        self.active = true;
        self.updated_at = Utc::now();
    }
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for Account {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let role: String = row.try_get("role")?;
        let role = role
            .parse::<AccountRole>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "role".into(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            role,
            organization_id: row.try_get("organization_id")?,
            active: row.try_get("active")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
