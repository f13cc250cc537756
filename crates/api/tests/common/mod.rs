//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use yatube_api::auth::jwt::{generate_access_token, JwtConfig};
use yatube_api::auth::password::hash_password;
use yatube_api::config::{LogFormat, ServerConfig};
use yatube_api::router::build_app_router;
use yatube_api::state::AppState;
use yatube_db::models::group::{CreateGroup, Group};
use yatube_db::models::user::{CreateUser, User};
use yatube_db::repositories::{GroupRepo, UserRepo};

/// Password given to every user made by [`create_user`].
pub const TEST_PASSWORD: &str = "correct-horse-42";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router (same middleware stack as production)
/// over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

/// Insert a user directly with [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, username: &str) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: Some(format!("{username}@example.com")),
            password_hash,
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Mint an access token for `user` signed with the test secret.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.username, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Insert a group directly; groups are not writable over the API.
pub async fn create_group(pool: &PgPool, slug: &str) -> Group {
    GroupRepo::create(
        pool,
        &CreateGroup {
            title: format!("Group {slug}"),
            slug: slug.to_string(),
            description: String::new(),
        },
    )
    .await
    .expect("group creation should succeed")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, None, Some(body)).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}
