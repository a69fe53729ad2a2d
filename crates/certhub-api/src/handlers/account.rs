//! Account registration handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use certhub_entity::account::AccountRole;

use crate::dto::request::RegisterRequest;
use crate::dto::response::{ApiResponse, RegisterResponse};
use crate::error::ApiError;
use crate::extractors::SignatureHeader;
use crate::state::AppState;

/// POST /api/accounts/register
///
/// Create an account and immediately issue its first login code.
pub async fn register(
    State(state): State<AppState>,
    SignatureHeader(signature): SignatureHeader,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RegisterResponse>>), ApiError> {
    req.validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let role = match req.role.as_deref() {
        Some(value) => value
            .parse::<AccountRole>()
            .map_err(|e| ApiError::validation(e.message))?,
        None => AccountRole::Member,
    };

    let registration = state
        .account_service
        .register(&req.email_address, role, req.organization_id, &signature)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(RegisterResponse {
            account_id: registration.account_id,
            code_id: registration.code_id,
        })),
    ))
}
