//! Integration tests for organization and internal permission checks.

use http::StatusCode;

use certhub_auth::hasher;

use crate::helpers::{TestApp, test_config};

const ORG_ONE: &str = "1111111111111111111111111111111111111111";
const ORG_TWO: &str = "2222222222222222222222222222222222222222";
const ORG_INTERNAL: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

#[tokio::test]
async fn test_org_admin_reads_own_organization() {
    let app = TestApp::new();
    app.seed_organization(ORG_ONE, "Org One").await;

    app.register("admin@one.com", "admin", Some(ORG_ONE), "dev-1")
        .await;
    let token = app.verify("dev-1").await;

    let response = app
        .request(
            "GET",
            &format!("/api/organizations/{ORG_ONE}"),
            None,
            Some(&token),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Org One");
    // Activated by the admin's first login.
    assert_eq!(response.body["data"]["active"], true);
}

#[tokio::test]
async fn test_org_admin_forbidden_for_foreign_organization() {
    let app = TestApp::new();
    app.seed_organization(ORG_ONE, "Org One").await;
    app.seed_organization(ORG_TWO, "Org Two").await;

    app.register("admin@one.com", "admin", Some(ORG_ONE), "dev-1")
        .await;
    let token = app.verify("dev-1").await;

    let response = app
        .request(
            "GET",
            &format!("/api/organizations/{ORG_TWO}"),
            None,
            Some(&token),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_member_forbidden_for_own_organization() {
    let app = TestApp::new();
    app.seed_organization(ORG_ONE, "Org One").await;

    app.register("user@one.com", "member", Some(ORG_ONE), "dev-1")
        .await;
    let token = app.verify("dev-1").await;

    let response = app
        .request(
            "GET",
            &format!("/api/organizations/{ORG_ONE}"),
            None,
            Some(&token),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_allowlisted_internal_reaches_foreign_organization() {
    let mut config = test_config();
    config.auth.internal_organizations = vec![hasher::organization_key(ORG_INTERNAL)];
    let app = TestApp::with_config(config);

    app.seed_organization(ORG_INTERNAL, "Platform Operations").await;
    app.seed_organization(ORG_TWO, "Org Two").await;

    app.register("ops@platform.com", "internal", Some(ORG_INTERNAL), "dev-1")
        .await;
    let token = app.verify("dev-1").await;

    let response = app
        .request(
            "GET",
            &format!("/api/organizations/{ORG_TWO}"),
            None,
            Some(&token),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_internal_outside_allowlist_is_forbidden() {
    // No allow-list entries at all.
    let app = TestApp::new();
    app.seed_organization(ORG_ONE, "Org One").await;
    app.seed_organization(ORG_TWO, "Org Two").await;

    app.register("ops@one.com", "internal", Some(ORG_ONE), "dev-1")
        .await;
    let token = app.verify("dev-1").await;

    let response = app
        .request(
            "GET",
            &format!("/api/organizations/{ORG_TWO}"),
            None,
            Some(&token),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_enrollment_requires_internal_role() {
    let app = TestApp::new();
    app.seed_organization(ORG_ONE, "Org One").await;

    app.register("admin@one.com", "admin", Some(ORG_ONE), "dev-1")
        .await;
    let admin_token = app.verify("dev-1").await;

    let body = serde_json::json!({ "id": ORG_TWO, "name": "Org Two" });
    let response = app
        .request(
            "POST",
            "/api/organizations",
            Some(body.clone()),
            Some(&admin_token),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    app.register("ops@platform.com", "internal", None, "dev-2")
        .await;
    let internal_token = app.verify("dev-2").await;

    let response = app
        .request(
            "POST",
            "/api/organizations",
            Some(body),
            Some(&internal_token),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["id"], ORG_TWO);
}
