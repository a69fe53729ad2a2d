//! Integration tests for session supersession, expiry, and logout.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_second_login_supersedes_first_session() {
    let app = TestApp::new();
    let account_id = app.register("a@b.com", "member", None, "dev-1").await;
    let first_token = app.verify("dev-1").await;

    // Logging in again from the same device replaces the session. Space the
    // logins so the second session's expiry, and therefore its
    // content-derived id, differs from the first.
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second_token = app.login("a@b.com", "dev-1").await;

    // Exactly one live session row remains for the binding.
    let bound = app
        .state
        .stores
        .sessions
        .find_by_binding(&account_id, "dev-1")
        .await
        .unwrap()
        .unwrap();
    let second_claims = app.state.token_decoder.verify(&second_token).unwrap();
    assert_eq!(bound.id, second_claims.ses);

    let response = app
        .request("GET", "/api/auth/me", None, Some(&first_token), &[])
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "SESSION_EXPIRED");

    let response = app
        .request("GET", "/api/auth/me", None, Some(&second_token), &[])
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_logins_on_different_devices_coexist() {
    let app = TestApp::new();
    app.register("a@b.com", "member", None, "dev-1").await;
    let token_one = app.verify("dev-1").await;
    let token_two = app.login("a@b.com", "dev-2").await;

    for token in [&token_one, &token_two] {
        let response = app
            .request("GET", "/api/auth/me", None, Some(token), &[])
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_session_near_expiry_is_rejected_and_removed() {
    let app = TestApp::new();
    app.register("a@b.com", "member", None, "dev-1").await;
    let token = app.verify("dev-1").await;

    // Pull the session inside the grace window.
    let claims = app.state.token_decoder.verify(&token).unwrap();
    let mut session = app
        .state
        .stores
        .sessions
        .get(&claims.ses)
        .await
        .unwrap()
        .unwrap();
    session.expires_at = chrono::Utc::now() + chrono::Duration::minutes(2);
    app.state.stores.sessions.insert(&session).await.unwrap();

    let response = app
        .request("GET", "/api/auth/me", None, Some(&token), &[])
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "SESSION_EXPIRED");

    // The expired row was pruned.
    assert!(
        app.state
            .stores
            .sessions
            .get(&claims.ses)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let app = TestApp::new();
    app.register("a@b.com", "member", None, "dev-1").await;
    let token = app.verify("dev-1").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token), &[])
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/auth/me", None, Some(&token), &[])
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let app = TestApp::new();
    app.register("a@b.com", "member", None, "dev-1").await;
    let token = app.verify("dev-1").await;

    let mut tampered = token.clone();
    tampered.pop();
    tampered.push('x');

    let response = app
        .request("GET", "/api/auth/me", None, Some(&tampered), &[])
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_device_mismatch_between_token_and_session() {
    let app = TestApp::new();
    app.register("a@b.com", "member", None, "dev-1").await;
    let token = app.verify("dev-1").await;

    // Rebind the stored session to a different device; the token's `dev`
    // claim no longer matches.
    let claims = app.state.token_decoder.verify(&token).unwrap();
    let mut session = app
        .state
        .stores
        .sessions
        .get(&claims.ses)
        .await
        .unwrap()
        .unwrap();
    session.device_id = "another-device".to_string();
    app.state.stores.sessions.insert(&session).await.unwrap();

    let response = app
        .request("GET", "/api/auth/me", None, Some(&token), &[])
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "SESSION_MISMATCH");
}
