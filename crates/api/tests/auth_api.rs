//! HTTP-level tests for identity resolution and the admin role gate.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{build_test_app, expect_json, get, get_auth, test_config, token_for};
use shotify_api::auth::jwt::{generate_access_token, JwtConfig, ROLE_ADMIN};
use tower::ServiceExt;
use uuid::Uuid;

#[tokio::test]
async fn missing_header_is_unauthenticated() {
    let json = expect_json(
        get(build_test_app(), "/api/v1/templates").await,
        StatusCode::UNAUTHORIZED,
    )
    .await;
    assert_eq!(json["code"], "UNAUTHENTICATED");
    assert_eq!(json["error"], "Missing Authorization header");
}

#[tokio::test]
async fn non_bearer_scheme_is_unauthenticated() {
    let request = Request::builder()
        .uri("/api/v1/projects")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();
    let response = build_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_other_secret_is_unauthenticated() {
    let foreign = JwtConfig {
        secret: "some-other-secret".to_string(),
        ..test_config().jwt
    };
    let token = generate_access_token(Uuid::now_v7(), ROLE_ADMIN, &foreign).unwrap();

    let response = get_auth(build_test_app(), "/api/v1/projects", &token).await;
    let json = expect_json(response, StatusCode::UNAUTHORIZED).await;
    assert_eq!(json["error"], "Invalid or expired token");
}

#[tokio::test]
async fn admin_token_passes_the_role_gate() {
    let token = token_for(Uuid::now_v7(), ROLE_ADMIN);
    let response = common::post_auth(build_test_app(), "/api/v1/admin/templates/seed", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unauthenticated_admin_call_is_401_not_403() {
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/v1/admin/templates/{}", Uuid::now_v7()))
        .body(Body::empty())
        .unwrap();
    let response = build_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
