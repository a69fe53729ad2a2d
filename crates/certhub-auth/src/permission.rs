//! Organization and internal permission policy.

use std::collections::HashSet;

use certhub_core::config::auth::AuthConfig;

use crate::error::AuthError;
use crate::hasher;
use crate::identity::Identity;

/// Authorizes cross-organization operations for a verified identity.
///
/// The allow-list holds *hashed* internal-organization identifiers, read
/// from configuration at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct PermissionPolicy {
    /// Hashed identifiers of organizations whose internal members have
    /// cross-tenant reach.
    internal_organizations: HashSet<String>,
}

impl PermissionPolicy {
    /// Create a policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            internal_organizations: config.internal_organizations.iter().cloned().collect(),
        }
    }

    /// Authorize an operation against the given target organization.
    ///
    /// Allowed when the identity administers the target organization
    /// itself, or when it carries the internal role from an allow-listed
    /// internal organization.
    pub fn check_organization_permission(
        &self,
        identity: &Identity,
        target_organization_id: &str,
    ) -> Result<(), AuthError> {
        if identity.role.is_org_admin()
            && identity.organization_id.as_deref() == Some(target_organization_id)
        {
            return Ok(());
        }

        if identity.role.is_internal() {
            if let Some(organization_id) = &identity.organization_id {
                if self
                    .internal_organizations
                    .contains(&hasher::organization_key(organization_id))
                {
                    return Ok(());
                }
            }
        }

        Err(AuthError::Forbidden(format!(
            "Not authorized for organization '{target_organization_id}'"
        )))
    }

    /// Authorize a platform-internal operation.
    pub fn check_internal_permission(&self, identity: &Identity) -> Result<(), AuthError> {
        if identity.role.is_internal() {
            Ok(())
        } else {
            Err(AuthError::Forbidden(
                "Internal role required".to_string(),
            ))
        }
    }
}
