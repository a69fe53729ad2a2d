//! Organization handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use crate::dto::request::EnrollOrganizationRequest;
use crate::dto::response::{ApiResponse, OrganizationResponse};
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// POST /api/organizations
///
/// Enroll a new organization. Platform-internal callers only.
pub async fn enroll(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(req): Json<EnrollOrganizationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<OrganizationResponse>>), ApiError> {
    state
        .permission_policy
        .check_internal_permission(&auth.identity)?;

    req.validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let organization = state.organization_service.enroll(req.id, req.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(OrganizationResponse::from(organization))),
    ))
}

/// GET /api/organizations/{id}
///
/// Read an organization's identity fields. Gated by the organization
/// permission check: own-organization admins, or allow-listed internals.
pub async fn get(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<OrganizationResponse>>, ApiError> {
    state
        .permission_policy
        .check_organization_permission(&auth.identity, &id)?;

    let organization = state.organization_service.get(&id).await?;

    Ok(Json(ApiResponse::ok(OrganizationResponse::from(
        organization,
    ))))
}
