//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available on an account.
///
/// `Internal` is the cross-tenant elevated role reserved for platform
/// operators; `Admin` administers a single organization; `Member` is a
/// regular organization user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// Platform operator with cross-tenant reach (subject to the
    /// internal-organization allow-list).
    Internal,
    /// Organization administrator.
    Admin,
    /// Regular organization member.
    Member,
}

impl AccountRole {
    /// Whether this role is elevated: internal or organization admin.
    ///
    /// Elevated roles flip organization activation on first login.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::Internal | Self::Admin)
    }

    /// Whether this role may administer its own organization.
    pub fn is_org_admin(&self) -> bool {
        self.is_elevated()
    }

    /// Whether this role is the cross-tenant internal role.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = certhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "internal" => Ok(Self::Internal),
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            _ => Err(certhub_core::AppError::validation(format!(
                "Invalid account role: '{s}'. Expected one of: internal, admin, member"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation() {
        assert!(AccountRole::Internal.is_elevated());
        assert!(AccountRole::Admin.is_elevated());
        assert!(!AccountRole::Member.is_elevated());
    }

    #[test]
    fn test_internal_is_exclusive() {
        assert!(AccountRole::Internal.is_internal());
        assert!(!AccountRole::Admin.is_internal());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<AccountRole>().unwrap(), AccountRole::Admin);
        assert_eq!(
            "INTERNAL".parse::<AccountRole>().unwrap(),
            AccountRole::Internal
        );
        assert!("superuser".parse::<AccountRole>().is_err());
    }
}
