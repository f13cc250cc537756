//! Field validators shared by the request DTOs.
//!
//! These plug into `validator` via `#[validate(custom(function = ...))]`.

use std::borrow::Cow;

use validator::ValidationError;

/// Maximum username length.
pub const USERNAME_MAX_LEN: usize = 150;

/// Minimum password length accepted at registration.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Reject empty or whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("This field may not be blank.")));
    }
    Ok(())
}

/// Usernames are 1..=150 characters of letters, digits and `@ . + - _`.
pub fn username(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len == 0 || len > USERNAME_MAX_LEN {
        return Err(ValidationError::new("length").with_message(Cow::Owned(format!(
            "Username must be between 1 and {USERNAME_MAX_LEN} characters."
        ))));
    }
    if !value
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return Err(ValidationError::new("invalid").with_message(Cow::Borrowed(
            "Username may contain only letters, numbers, and @/./+/-/_ characters.",
        )));
    }
    Ok(())
}

/// Enforce the minimum password length.
pub fn password_strength(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < PASSWORD_MIN_LEN {
        return Err(ValidationError::new("too_short").with_message(Cow::Owned(format!(
            "Password must be at least {PASSWORD_MIN_LEN} characters long."
        ))));
    }
    Ok(())
}
