//! Organization entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use certhub_core::error::AppError;

use crate::ident::validate_identifier;

/// A tenant organization.
///
/// Identifiers are externally supplied 40-hex strings. Organizations start
/// inactive and are activated when an elevated member completes their first
/// login.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Organization {
    /// Externally supplied 40-hex identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether an elevated member has completed a first login.
    pub active: bool,
    /// When the organization was enrolled.
    pub created_at: DateTime<Utc>,
}

impl Organization {
    /// Create a new, inactive organization.
    pub fn new(id: String, name: String) -> Result<Self, AppError> {
        validate_identifier(&id)?;
        if name.trim().is_empty() {
            return Err(AppError::validation("Organization name is required"));
        }
        Ok(Self {
            id,
            name,
            active: false,
            created_at: Utc::now(),
        })
    }

    /// Mark the organization active.
    pub fn activate(&mut self) {
        self.active = true;
    }
}
