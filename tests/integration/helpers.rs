//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use certhub_api::{AppState, build_router};
use certhub_auth::{SignatureCodec, hasher};
use certhub_core::config::AppConfig;
use certhub_entity::organization::Organization;
use certhub_entity::signature::DeviceSignature;
use certhub_notify::LogNotifier;
use certhub_store::Stores;

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Application state for direct store access.
    pub state: AppState,
}

/// Default configuration for tests.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.token_secret = "integration-test-secret".to_string();
    config
}

impl TestApp {
    /// Create a test application over an in-memory store.
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application with a custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        let stores = Stores::memory();
        let notifier = Arc::new(LogNotifier::new());
        let state = AppState::build(config, stores, notifier);
        let router = build_router(state.clone());
        Self { router, state }
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        extra_headers: &[(&str, String)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        for (name, value) in extra_headers {
            req = req.header(*name, value.as_str());
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Enroll an organization directly in the store.
    pub async fn seed_organization(&self, id: &str, name: &str) {
        let organization = Organization::new(id.to_string(), name.to_string())
            .expect("Invalid test organization");
        self.state
            .stores
            .organizations
            .insert(&organization)
            .await
            .expect("Failed to seed organization");
    }

    /// Register an account through the API and return its id.
    pub async fn register(
        &self,
        email: &str,
        role: &str,
        organization_id: Option<&str>,
        device: &str,
    ) -> String {
        let mut body = serde_json::json!({
            "emailAddress": email,
            "role": role,
        });
        if let Some(org) = organization_id {
            body["organizationId"] = Value::String(org.to_string());
        }

        let response = self
            .request(
                "POST",
                "/api/accounts/register",
                Some(body),
                None,
                &[signature_header(&signature(device))],
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        response.body["data"]["accountId"]
            .as_str()
            .expect("No accountId in registration response")
            .to_string()
    }

    /// Read the outstanding code for a device straight from the store.
    pub async fn stored_code(&self, device: &str) -> String {
        let sig = signature(device);
        let code_id = hasher::code_id(&sig.user_agent, &sig.unique_id);
        self.state
            .stores
            .codes
            .get(&code_id)
            .await
            .expect("Code lookup failed")
            .expect("No outstanding code for device")
            .code
    }

    /// Verify the outstanding code for a device and return the bearer token.
    pub async fn verify(&self, device: &str) -> String {
        let code = self.stored_code(device).await;
        let response = self
            .request(
                "POST",
                "/api/auth/verify",
                None,
                None,
                &[
                    signature_header(&signature(device)),
                    ("x-auth-code", code),
                ],
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Verification failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in verification response")
            .to_string()
    }

    /// Request a login code for a returning user and verify it.
    pub async fn login(&self, email: &str, device: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/code",
                Some(serde_json::json!({ "emailAddress": email })),
                None,
                &[signature_header(&signature(device))],
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Code request failed: {:?}",
            response.body
        );

        self.verify(device).await
    }
}

/// A deterministic device signature for the given device id.
pub fn signature(device: &str) -> DeviceSignature {
    DeviceSignature {
        unique_id: device.to_string(),
        user_agent: "integration-agent/1.0".to_string(),
        ip_address: "10.0.0.1".to_string(),
    }
}

/// Encode a signature into its request header pair.
pub fn signature_header(signature: &DeviceSignature) -> (&'static str, String) {
    (
        "x-device-signature",
        SignatureCodec::encode(signature).expect("Failed to encode signature"),
    )
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}
