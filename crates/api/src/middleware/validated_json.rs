//! JSON body extractors that run `validator` rules.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// A JSON request body that deserialized and passed [`Validate`].
///
/// Malformed JSON or missing required fields are reported as 400
/// `BAD_REQUEST`; rule violations as 400 `VALIDATION_ERROR` with
/// per-field messages.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// A buffered JSON body that is parsed and validated only when the handler
/// asks for it.
///
/// Writes to an existing object take this instead of [`ValidatedJson`] so the
/// object lookup (404) and ownership check (403) run before any body error
/// (400).
///
/// ```ignore
/// async fn update(requester: Requester, Path(id): Path<DbId>, body: DeferredJson) -> AppResult<Json<Post>> {
///     let post = load(id).await?;
///     requester.authorize(&post)?;
///     let input: CreatePost = body.validated()?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DeferredJson {
    bytes: Bytes,
    json_content_type: bool,
}

impl DeferredJson {
    /// Deserialize and validate the body as `T`.
    pub fn validated<T>(self) -> AppResult<T>
    where
        T: DeserializeOwned + Validate,
    {
        if !self.json_content_type {
            return Err(AppError::BadRequest(
                "Expected request with `Content-Type: application/json`".into(),
            ));
        }
        let value: T = serde_json::from_slice(&self.bytes).map_err(|e| {
            AppError::BadRequest(format!(
                "Failed to deserialize the JSON body into the target type: {e}"
            ))
        })?;
        value.validate()?;
        Ok(value)
    }
}

impl<S> FromRequest<S> for DeferredJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_content_type = is_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(DeferredJson {
            bytes,
            json_content_type,
        })
    }
}

/// `application/json` or any `application/*+json` media type.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
