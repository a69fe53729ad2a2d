//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use certhub_auth::{
    AuthCodeFlow, PermissionPolicy, SessionManager, TokenDecoder, TokenEncoder,
};
use certhub_core::config::AppConfig;
use certhub_core::traits::Notifier;
use certhub_service::{AccountService, OrganizationService};
use certhub_store::Stores;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration.
    pub config: Arc<AppConfig>,

    // ── Persistence ──────────────────────────────────────────
    /// Store handles (memory or postgres).
    pub stores: Stores,

    // ── Identity core ────────────────────────────────────────
    /// One-time code issuance and verification.
    pub code_flow: Arc<AuthCodeFlow>,
    /// Session lifecycle manager.
    pub session_manager: Arc<SessionManager>,
    /// Token encoder.
    pub token_encoder: Arc<TokenEncoder>,
    /// Token decoder and validator.
    pub token_decoder: Arc<TokenDecoder>,
    /// Organization/internal permission policy.
    pub permission_policy: Arc<PermissionPolicy>,

    // ── Services ─────────────────────────────────────────────
    /// Account identity-field service.
    pub account_service: Arc<AccountService>,
    /// Organization identity-field service.
    pub organization_service: Arc<OrganizationService>,
}

impl AppState {
    /// Wire the full application state from configuration, stores, and a
    /// notifier.
    pub fn build(config: AppConfig, stores: Stores, notifier: Arc<dyn Notifier>) -> Self {
        let code_flow = Arc::new(AuthCodeFlow::new(
            stores.codes.clone(),
            stores.accounts.clone(),
            stores.organizations.clone(),
            notifier,
            &config.auth,
        ));
        let session_manager = Arc::new(SessionManager::new(
            stores.sessions.clone(),
            stores.accounts.clone(),
            &config.session,
        ));
        let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
        let token_decoder = Arc::new(TokenDecoder::new(&config.auth));
        let permission_policy = Arc::new(PermissionPolicy::new(&config.auth));
        let account_service = Arc::new(AccountService::new(
            stores.accounts.clone(),
            stores.organizations.clone(),
            code_flow.clone(),
        ));
        let organization_service =
            Arc::new(OrganizationService::new(stores.organizations.clone()));

        Self {
            config: Arc::new(config),
            stores,
            code_flow,
            session_manager,
            token_encoder,
            token_decoder,
            permission_policy,
            account_service,
            organization_service,
        }
    }
}
