//! Author-or-read-only authorization extractor.
//!
//! [`Requester`] runs the coarse, pre-lookup phase when it is extracted:
//! anonymous requests may only use safe methods. Handlers then call
//! [`Requester::authorize`] with the loaded object for the ownership phase.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::Method;
use yatube_core::error::CoreError;
use yatube_core::permissions::{
    check_author_or_read_only, check_authenticated_or_read_only, Authored,
};
use yatube_core::types::DbId;

use super::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// The identity and method of the current request.
///
/// A request that carries an `Authorization` header must authenticate
/// successfully even on safe methods; a bad token is never downgraded to
/// anonymous.
///
/// ```ignore
/// async fn update(requester: Requester, Path(id): Path<DbId>) -> AppResult<Json<Post>> {
///     let post = load(id).await?;
///     requester.authorize(&post)?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Requester {
    method: Method,
    user: Option<AuthUser>,
}

impl Requester {
    /// The authenticated user, or 401 for anonymous requests.
    pub fn require_user(&self) -> AppResult<&AuthUser> {
        self.user.as_ref().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Authentication credentials were not provided".into(),
            ))
        })
    }

    fn user_id(&self) -> Option<DbId> {
        self.user.as_ref().map(|u| u.user_id)
    }

    /// Object-level check: unsafe methods require the requester to be the
    /// object's author.
    pub fn authorize<T: Authored>(&self, object: &T) -> AppResult<()> {
        check_author_or_read_only(self.method.as_str(), self.user_id(), object)?;
        Ok(())
    }
}

impl FromRequestParts<AppState> for Requester {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = if parts.headers.contains_key(AUTHORIZATION) {
            Some(AuthUser::from_request_parts(parts, state).await?)
        } else {
            None
        };

        let requester = Requester {
            method: parts.method.clone(),
            user,
        };
        check_authenticated_or_read_only(requester.method.as_str(), requester.user_id())?;
        Ok(requester)
    }
}
