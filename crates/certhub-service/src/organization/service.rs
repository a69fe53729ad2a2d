//! Organization enrollment and identity-field reads.

use std::sync::Arc;

use tracing::info;

use certhub_core::error::AppError;
use certhub_entity::organization::Organization;
use certhub_store::OrganizationStore;

/// Manages organization identity fields.
#[derive(Debug, Clone)]
pub struct OrganizationService {
    /// Organization identity fields.
    organizations: Arc<dyn OrganizationStore>,
}

impl OrganizationService {
    /// Create a new organization service.
    pub fn new(organizations: Arc<dyn OrganizationStore>) -> Self {
        Self { organizations }
    }

    /// Enroll an organization under its externally supplied identifier.
    ///
    /// The organization starts inactive; it activates when an elevated
    /// member completes their first login.
    pub async fn enroll(&self, id: String, name: String) -> Result<Organization, AppError> {
        let organization = Organization::new(id, name)?;

        if self.organizations.exists(&organization.id).await? {
            return Err(AppError::conflict(format!(
                "Organization '{}' is already enrolled",
                organization.id
            )));
        }

        self.organizations.insert(&organization).await?;
        info!(organization_id = %organization.id, "Organization enrolled");

        Ok(organization)
    }

    /// Fetch an organization by id.
    pub async fn get(&self, id: &str) -> Result<Organization, AppError> {
        self.organizations
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Organization '{id}' not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certhub_store::Stores;

    const ORG_ID: &str = "1111111111111111111111111111111111111111";

    #[tokio::test]
    async fn test_enroll_then_get() {
        let stores = Stores::memory();
        let service = OrganizationService::new(stores.organizations.clone());

        service
            .enroll(ORG_ID.to_string(), "Acme Certificates".to_string())
            .await
            .unwrap();
        let organization = service.get(ORG_ID).await.unwrap();
        assert_eq!(organization.name, "Acme Certificates");
        assert!(!organization.active);
    }

    #[tokio::test]
    async fn test_double_enrollment_conflicts() {
        let stores = Stores::memory();
        let service = OrganizationService::new(stores.organizations.clone());

        service
            .enroll(ORG_ID.to_string(), "Acme".to_string())
            .await
            .unwrap();
        assert!(
            service
                .enroll(ORG_ID.to_string(), "Acme".to_string())
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_malformed_identifier_rejected() {
        let stores = Stores::memory();
        let service = OrganizationService::new(stores.organizations.clone());
        assert!(
            service
                .enroll("not-hex".to_string(), "Acme".to_string())
                .await
                .is_err()
        );
    }
}
