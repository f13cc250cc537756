//! Integration tests for the repository layer.
//!
//! Each test runs against a fresh database with all migrations applied.

use sqlx::PgPool;
use yatube_db::models::comment::Comment;
use yatube_db::models::group::CreateGroup;
use yatube_db::models::post::{CreatePost, PatchPost};
use yatube_db::models::user::{CreateUser, User};
use yatube_db::repositories::{CommentRepo, GroupRepo, PostRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: None,
            password_hash: "not-a-real-hash".to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
}

fn new_post(text: &str, group: Option<i64>) -> CreatePost {
    CreatePost {
        text: text.to_string(),
        group,
    }
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_post_joins_author_username(pool: PgPool) {
    let alice = new_user(&pool, "alice").await;
    let post = PostRepo::create(&pool, alice.id, &new_post("  hello  ", None))
        .await
        .unwrap();

    assert_eq!(post.author_id, alice.id);
    assert_eq!(post.author, "alice");
    assert_eq!(post.text, "hello");
    assert_eq!(post.group_id, None);

    let found = PostRepo::find_by_id(&pool, post.id).await.unwrap().unwrap();
    assert_eq!(found.id, post.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_page_and_count(pool: PgPool) {
    let alice = new_user(&pool, "alice").await;
    for i in 0..5 {
        PostRepo::create(&pool, alice.id, &new_post(&format!("post {i}"), None))
            .await
            .unwrap();
    }

    assert_eq!(PostRepo::count(&pool).await.unwrap(), 5);
    assert_eq!(PostRepo::list(&pool).await.unwrap().len(), 5);

    let page = PostRepo::list_page(&pool, 2, 4).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].text, "post 4");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_distinguishes_absent_and_null_group(pool: PgPool) {
    let alice = new_user(&pool, "alice").await;
    let group = GroupRepo::create(
        &pool,
        &CreateGroup {
            title: "Cats".to_string(),
            slug: "cats".to_string(),
            description: String::new(),
        },
    )
    .await
    .unwrap();
    let post = PostRepo::create(&pool, alice.id, &new_post("meow", Some(group.id)))
        .await
        .unwrap();

    // Absent group: unchanged.
    let patch = PatchPost {
        text: Some("purr".to_string()),
        group: None,
    };
    let updated = PostRepo::patch(&pool, post.id, &patch).await.unwrap().unwrap();
    assert_eq!(updated.text, "purr");
    assert_eq!(updated.group_id, Some(group.id));

    // Explicit null: detached.
    let patch = PatchPost {
        text: None,
        group: Some(None),
    };
    let updated = PostRepo::patch(&pool, post.id, &patch).await.unwrap().unwrap();
    assert_eq!(updated.text, "purr");
    assert_eq!(updated.group_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_missing_post_returns_none(pool: PgPool) {
    let result = PostRepo::replace(&pool, 999_999, &new_post("x", None))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_group_detaches_posts(pool: PgPool) {
    let alice = new_user(&pool, "alice").await;
    let group = GroupRepo::create(
        &pool,
        &CreateGroup {
            title: "Dogs".to_string(),
            slug: "dogs".to_string(),
            description: String::new(),
        },
    )
    .await
    .unwrap();
    let post = PostRepo::create(&pool, alice.id, &new_post("woof", Some(group.id)))
        .await
        .unwrap();

    sqlx::query("DELETE FROM groups WHERE id = $1")
        .bind(group.id)
        .execute(&pool)
        .await
        .unwrap();

    let post = PostRepo::find_by_id(&pool, post.id).await.unwrap().unwrap();
    assert_eq!(post.group_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_group_slug_is_rejected(pool: PgPool) {
    let input = CreateGroup {
        title: "A".to_string(),
        slug: "same".to_string(),
        description: String::new(),
    };
    GroupRepo::create(&pool, &input).await.unwrap();
    let err = GroupRepo::create(&pool, &input).await.unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.constraint(), Some("uq_groups_slug"));
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn comments_are_scoped_to_their_post(pool: PgPool) {
    let alice = new_user(&pool, "alice").await;
    let bob = new_user(&pool, "bob").await;
    let first = PostRepo::create(&pool, alice.id, &new_post("first", None))
        .await
        .unwrap();
    let second = PostRepo::create(&pool, alice.id, &new_post("second", None))
        .await
        .unwrap();

    let on_first = CommentRepo::create(&pool, first.id, bob.id, "nice")
        .await
        .unwrap();
    CommentRepo::create(&pool, second.id, bob.id, "also nice")
        .await
        .unwrap();

    let listed: Vec<Comment> = CommentRepo::list_by_post(&pool, first.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].post_id, first.id);
    assert_eq!(listed[0].author, "bob");

    assert!(CommentRepo::find_in_post(&pool, first.id, on_first.id)
        .await
        .unwrap()
        .is_some());
    assert!(CommentRepo::find_in_post(&pool, second.id, on_first.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_post_cascades_to_comments(pool: PgPool) {
    let alice = new_user(&pool, "alice").await;
    let post = PostRepo::create(&pool, alice.id, &new_post("doomed", None))
        .await
        .unwrap();
    CommentRepo::create(&pool, post.id, alice.id, "bye").await.unwrap();

    assert!(PostRepo::delete(&pool, post.id).await.unwrap());
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_comment_text(pool: PgPool) {
    let alice = new_user(&pool, "alice").await;
    let post = PostRepo::create(&pool, alice.id, &new_post("p", None))
        .await
        .unwrap();
    let comment = CommentRepo::create(&pool, post.id, alice.id, "typo")
        .await
        .unwrap();

    let updated = CommentRepo::update_text(&pool, comment.id, "fixed")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.text, "fixed");
    assert_eq!(updated.post_id, post.id);

    assert!(CommentRepo::delete(&pool, comment.id).await.unwrap());
    assert!(!CommentRepo::delete(&pool, comment.id).await.unwrap());
}
