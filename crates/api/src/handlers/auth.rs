//! Handlers for the `/auth` resource (login, refresh, verify, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use yatube_core::error::CoreError;
use yatube_core::types::DbId;
use yatube_db::models::session::CreateSession;
use yatube_db::repositories::{SessionRepo, UserRepo};

use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, hash_refresh_token, validate_token,
};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Request body for `POST /auth/verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub token: String,
}

/// Token pair returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access: String,
    pub refresh: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "No active account found with the given credentials".into(),
    ))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = user.id, "Login rejected");
        return Err(invalid_credentials());
    }

    let response = issue_tokens(&state, user.id, &user.username).await?;
    tracing::info!(user_id = user.id, "User logged in");
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for a new token pair. The presented
/// refresh token is revoked.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token_hash = hash_refresh_token(&input.refresh);

    let session = SessionRepo::find_active_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // A concurrent refresh with the same token loses the race here.
    if !SessionRepo::revoke(&state.pool, session.id).await? {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid or expired refresh token".into(),
        )));
    }

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let response = issue_tokens(&state, user.id, &user.username).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/verify
///
/// Returns `{}` when the access token is valid, 401 otherwise.
pub async fn verify(
    State(state): State<AppState>,
    Json(input): Json<VerifyRequest>,
) -> AppResult<Json<Value>> {
    validate_token(&input.token, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized("Token is invalid or expired".into()))
    })?;
    Ok(Json(json!({})))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated user. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    tracing::info!(user_id = auth_user.user_id, revoked, "User logged out");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate access + refresh tokens and persist a session row.
async fn issue_tokens(state: &AppState, user_id: DbId, username: &str) -> AppResult<TokenResponse> {
    let access = generate_access_token(user_id, username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id,
            refresh_token_hash: refresh_hash,
            expires_at,
        },
    )
    .await?;

    Ok(TokenResponse {
        access,
        refresh: refresh_plaintext,
        expires_in: state.config.jwt.access_token_ttl_secs(),
    })
}
