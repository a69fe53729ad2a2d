//! Auth handlers — code request, code verification, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use validator::Validate;

use crate::dto::request::RequestCodeRequest;
use crate::dto::response::{
    AccountResponse, ApiResponse, CodeIssuedResponse, MessageResponse, TokenResponse,
};
use crate::error::ApiError;
use crate::extractors::{AuthSession, SignatureHeader};
use crate::state::AppState;

/// Request header carrying the plaintext one-time code on verification.
pub const AUTH_CODE_HEADER: &str = "x-auth-code";

/// POST /api/auth/code
///
/// Issue a login code for an existing account.
pub async fn request_code(
    State(state): State<AppState>,
    SignatureHeader(signature): SignatureHeader,
    Json(req): Json<RequestCodeRequest>,
) -> Result<Json<ApiResponse<CodeIssuedResponse>>, ApiError> {
    req.validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let code_id = state
        .account_service
        .request_login_code(&req.email_address, &signature)
        .await?;

    Ok(Json(ApiResponse::ok(CodeIssuedResponse { code_id })))
}

/// POST /api/auth/verify
///
/// Consume the outstanding code for this device and exchange it for a
/// session-backed bearer token.
pub async fn verify(
    State(state): State<AppState>,
    SignatureHeader(signature): SignatureHeader,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let supplied = headers
        .get(AUTH_CODE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::validation("verification code header is missing"))?;

    let identity = state.code_flow.verify_code(&signature, supplied).await?;
    let session = state.session_manager.new_session(&identity, &signature).await?;
    let signed = state.token_encoder.generate(&identity, &session.id)?;

    let account = state.account_service.profile(&identity.account_id).await?;

    Ok(Json(ApiResponse::ok(TokenResponse {
        token: signed.token,
        expires_at: signed.expires_at,
        account: AccountResponse::from(account),
    })))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_manager.invalidate(&auth.session.id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out successfully".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    let account = state
        .account_service
        .profile(&auth.identity.account_id)
        .await?;

    Ok(Json(ApiResponse::ok(AccountResponse::from(account))))
}
