#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use shotify_api::auth::jwt::{generate_access_token, JwtConfig, ROLE_ADMIN, ROLE_USER};
use shotify_api::config::ServerConfig;
use shotify_api::router::build_app_router;
use shotify_api::state::AppState;
use shotify_core::types::UserId;
use shotify_db::store::Stores;
use tower::ServiceExt;
use uuid::Uuid;

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
        database_url: None,
        seed_templates: false,
        seed_force: false,
    }
}

/// The full application router over fresh in-memory stores.
///
/// Each call returns an independent application; clone the returned
/// router to issue several requests against the same state.
pub fn build_test_app() -> Router {
    build_app_router(AppState::new(Stores::in_memory(), test_config()))
}

/// Sign a token for `user_id` with the given role.
pub fn token_for(user_id: UserId, role: &str) -> String {
    generate_access_token(user_id, role, &test_config().jwt).expect("token generation should succeed")
}

/// A fresh ordinary user and their bearer token.
pub fn new_user() -> (UserId, String) {
    let id = Uuid::now_v7();
    (id, token_for(id, ROLE_USER))
}

/// A bearer token for a fresh admin.
pub fn admin_token() -> String {
    token_for(Uuid::now_v7(), ROLE_ADMIN)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

fn request(method: &str, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header("authorization", format!("Bearer {token}")),
        None => builder,
    }
}

/// GET without credentials.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request("GET", uri, None).body(Body::empty()).unwrap()).await
}

/// GET with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request("GET", uri, Some(token)).body(Body::empty()).unwrap()).await
}

/// Send a JSON body with the given method and bearer token.
pub async fn send_json_auth(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = request(method, uri, Some(token))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send_json_auth(app, "POST", uri, body, token).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send_json_auth(app, "PUT", uri, body, token).await
}

/// POST with no body.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request("POST", uri, Some(token)).body(Body::empty()).unwrap()).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request("DELETE", uri, Some(token)).body(Body::empty()).unwrap()).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and return the parsed body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Template payload in wire shape: platform `both`, one text layer.
pub fn minimal_dark_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "minimal-dark",
        "platform": "both",
        "category": "minimal",
        "thumbnail": "/templates/minimal-dark.png",
        "jsonConfig": {
            "canvas": { "width": 1242, "height": 2688, "backgroundColor": "#0B0B0F" },
            "layers": [{
                "id": "headline-1",
                "type": "text",
                "name": "Title",
                "x": 621, "y": 280, "width": 1000, "height": 100,
                "rotation": 0, "visible": true, "locked": false,
                "opacity": 1, "zIndex": 10,
                "properties": {
                    "content": "Transform Your App",
                    "fontFamily": "Inter",
                    "shadow": { "blur": 4 }
                }
            }],
            "images": []
        }
    })
}

/// Create a template through the admin API and return its id.
pub async fn create_template(app: Router, payload: serde_json::Value) -> String {
    let response = post_json_auth(app, "/api/v1/admin/templates", payload, &admin_token()).await;
    let json = expect_json(response, StatusCode::CREATED).await;
    json["data"]["id"].as_str().unwrap().to_string()
}

/// Create a project for the token's user and return its id.
pub async fn create_project(app: Router, template_id: &str, name: &str, token: &str) -> String {
    let body = serde_json::json!({ "templateId": template_id, "name": name });
    let response = post_json_auth(app, "/api/v1/projects", body, token).await;
    let json = expect_json(response, StatusCode::CREATED).await;
    json["data"]["id"].as_str().unwrap().to_string()
}
