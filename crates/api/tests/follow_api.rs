//! HTTP-level integration tests for `/api/v1/follow`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user, get, get_auth, post_json, post_json_auth, token_for};
use serde_json::json;
use sqlx::PgPool;

async fn follow(pool: &PgPool, token: &str, username: &str) -> axum::response::Response {
    post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/follow",
        json!({ "following": username }),
        token,
    )
    .await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn anonymous_access_is_unauthorized(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/api/v1/follow").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/follow",
        json!({ "following": "bob" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_ignores_user_in_payload(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    create_user(&pool, "bob").await;
    create_user(&pool, "carol").await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/follow",
        json!({ "user": "carol", "following": "bob" }),
        &token_for(&alice),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "user": "alice", "following": "bob" }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn self_follow_is_rejected(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;

    let response = follow(&pool, &token_for(&alice), "alice").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["following"][0], "You cannot follow yourself.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_follow_is_rejected(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    create_user(&pool, "bob").await;
    let token = token_for(&alice);

    assert_eq!(follow(&pool, &token, "bob").await.status(), StatusCode::CREATED);
    let response = follow(&pool, &token, "bob").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fields"]["following"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_target_is_rejected(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;

    let response = follow(&pool, &token_for(&alice), "nobody").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["fields"]["following"][0],
        "Object with username=nobody does not exist."
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_target_is_rejected(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;

    let response = follow(&pool, &token_for(&alice), "  ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["fields"]["following"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_shows_only_own_follows(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    create_user(&pool, "carol").await;

    follow(&pool, &token_for(&alice), "bob").await;
    follow(&pool, &token_for(&alice), "carol").await;
    follow(&pool, &token_for(&bob), "carol").await;

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/follow",
        &token_for(&alice),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json,
        json!([
            { "user": "alice", "following": "bob" },
            { "user": "alice", "following": "carol" },
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_filters_by_followed_username(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    create_user(&pool, "bob").await;
    create_user(&pool, "carol").await;
    let token = token_for(&alice);

    follow(&pool, &token, "bob").await;
    follow(&pool, &token, "carol").await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/follow?search=CAR",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json, json!([{ "user": "alice", "following": "carol" }]));

    // Searching the follower's own name matches nothing.
    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/follow?search=alice",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json, json!([]));
}
