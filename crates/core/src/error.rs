use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A validation failure attributable to a single input field.
    #[error("Invalid value for '{field}': {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidField`].
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::InvalidField {
            field,
            message: message.into(),
        }
    }
}
