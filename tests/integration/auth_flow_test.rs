//! Integration tests for registration and the magic-code login flow.

use http::StatusCode;

use certhub_auth::hasher;

use crate::helpers::{TestApp, signature, signature_header};

#[tokio::test]
async fn test_register_verify_me_end_to_end() {
    let app = TestApp::new();

    let account_id = app.register("a@b.com", "member", None, "dev-1").await;
    assert_eq!(account_id, hasher::account_id("a@b.com"));

    // The account exists but is not active until the code is verified.
    let account = app
        .state
        .stores
        .accounts
        .get(&account_id)
        .await
        .unwrap()
        .unwrap();
    assert!(!account.active);

    let token = app.verify("dev-1").await;

    // The token encodes the content-derived account id as its subject.
    let claims = app.state.token_decoder.verify(&token).unwrap();
    assert_eq!(claims.sub, account_id);

    // The session row is live and the account is now active.
    let response = app
        .request("GET", "/api/auth/me", None, Some(&token), &[])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "a@b.com");
    assert_eq!(response.body["data"]["active"], true);
}

#[tokio::test]
async fn test_wrong_code_is_rejected_and_retry_succeeds() {
    let app = TestApp::new();
    app.register("a@b.com", "member", None, "dev-1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/verify",
            None,
            None,
            &[
                signature_header(&signature("dev-1")),
                ("x-auth-code", "WRONG999".to_string()),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "CODE_MISMATCH");

    // The code survived the mismatch; the right value still works.
    app.verify("dev-1").await;
}

#[tokio::test]
async fn test_code_is_single_use() {
    let app = TestApp::new();
    app.register("a@b.com", "member", None, "dev-1").await;

    let code = app.stored_code("dev-1").await;
    app.verify("dev-1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/verify",
            None,
            None,
            &[
                signature_header(&signature("dev-1")),
                ("x-auth-code", code),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "CODE_NOT_FOUND");
}

#[tokio::test]
async fn test_repeated_request_leaves_one_code_outstanding() {
    let app = TestApp::new();
    app.register("a@b.com", "member", None, "dev-1").await;
    let first = app.stored_code("dev-1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/code",
            Some(serde_json::json!({ "emailAddress": "a@b.com" })),
            None,
            &[signature_header(&signature("dev-1"))],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let second = app.stored_code("dev-1").await;
    assert_ne!(first, second);

    // Only the second value is in effect.
    let response = app
        .request(
            "POST",
            "/api/auth/verify",
            None,
            None,
            &[
                signature_header(&signature("dev-1")),
                ("x-auth-code", first),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    app.verify("dev-1").await;
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = TestApp::new();
    app.register("a@b.com", "member", None, "dev-1").await;

    let response = app
        .request(
            "POST",
            "/api/accounts/register",
            Some(serde_json::json!({ "emailAddress": "a@b.com" })),
            None,
            &[signature_header(&signature("dev-2"))],
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_code_request_for_unknown_account() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/code",
            Some(serde_json::json!({ "emailAddress": "nobody@b.com" })),
            None,
            &[signature_header(&signature("dev-1"))],
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "ACCOUNT_NOT_FOUND");
}

#[tokio::test]
async fn test_missing_signature_header() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/code",
            Some(serde_json::json!({ "emailAddress": "a@b.com" })),
            None,
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_SIGNATURE");
}

#[tokio::test]
async fn test_signature_with_extra_key_is_rejected() {
    let app = TestApp::new();

    use base64::Engine as _;
    let header = base64::engine::general_purpose::STANDARD
        .encode(r#"{"uniqueId":"a","userAgent":"b","ipAddress":"c","extra":"x"}"#);

    let response = app
        .request(
            "POST",
            "/api/auth/code",
            Some(serde_json::json!({ "emailAddress": "a@b.com" })),
            None,
            &[("x-device-signature", header)],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_SIGNATURE");
}

#[tokio::test]
async fn test_verify_without_code_header() {
    let app = TestApp::new();
    app.register("a@b.com", "member", None, "dev-1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/verify",
            None,
            None,
            &[signature_header(&signature("dev-1"))],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/auth/me", None, None, &[]).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
