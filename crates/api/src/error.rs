use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Map, Value};
use validator::ValidationErrors;
use yatube_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `yatube_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Field-level validation failures on a request body.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut fields = None;

        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::InvalidField { field, message } => {
                    let mut map = Map::new();
                    map.insert((*field).to_string(), json!([message]));
                    fields = Some(map);
                    (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        message.clone(),
                    )
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Request body validation ---
            AppError::InvalidInput(errors) => {
                fields = Some(field_messages(errors));
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Validation failed".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(fields) = fields {
            body["fields"] = Value::Object(fields);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Flatten `validator` errors into `{ field: [message, ...] }`.
///
/// Errors without a custom message fall back to their code.
fn field_messages(errors: &ValidationErrors) -> Map<String, Value> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages: Vec<Value> = errs
                .iter()
                .map(|e| {
                    let text = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    Value::String(text)
                })
                .collect();
            (field.to_string(), Value::Array(messages))
        })
        .collect()
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Check constraint violations (constraint name starting with `ck_`) and
///   foreign key violations map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                // PostgreSQL unique constraint violation
                Some("23505") if constraint.starts_with("uq_") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
                // PostgreSQL check constraint violation
                Some("23514") if constraint.starts_with("ck_") => {
                    return (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        format!("Value violates constraint: {constraint}"),
                    );
                }
                // PostgreSQL foreign key violation
                Some("23503") => {
                    return (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        "Referenced object does not exist".to_string(),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use axum::body::to_bytes;
    use validator::ValidationError;

    use super::*;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, body) = render(AppError::Core(CoreError::NotFound {
            entity: "Post",
            id: 7,
        }))
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["error"], "Post with id 7 not found");
    }

    #[tokio::test]
    async fn forbidden_and_unauthorized_are_distinct() {
        let (status, _) = render(CoreError::Forbidden("no".into()).into()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        let (status, _) = render(CoreError::Unauthorized("no".into()).into()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn invalid_field_lists_the_field() {
        let (status, body) =
            render(CoreError::invalid_field("following", "You cannot follow yourself.").into())
                .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["fields"]["following"][0], "You cannot follow yourself.");
    }

    #[tokio::test]
    async fn validation_errors_list_every_field() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "text",
            ValidationError::new("blank")
                .with_message(Cow::Borrowed("This field may not be blank.")),
        );
        let (status, body) = render(AppError::InvalidInput(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["fields"]["text"][0], "This field may not be blank.");
    }

    #[tokio::test]
    async fn internal_errors_are_sanitized() {
        let (status, body) = render(AppError::InternalError("secret detail".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "An internal error occurred");
    }
}
