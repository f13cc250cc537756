//! Handlers for the `/users` resource (registration).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;
use yatube_core::error::CoreError;
use yatube_db::models::user::{CreateUser, UserResponse};
use yatube_db::repositories::UserRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "yatube_core::validation::username"))]
    pub username: String,
    #[validate(custom(function = "yatube_core::validation::password_strength"))]
    pub password: String,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: Option<String>,
}

/// POST /api/v1/users
///
/// Register a new account. The password is stored as an Argon2id hash.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(CoreError::invalid_field(
            "username",
            "A user with that username already exists.",
        )
        .into());
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let email = input
        .email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
