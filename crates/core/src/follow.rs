//! Rules for follow edges.

use crate::error::CoreError;
use crate::types::DbId;

/// Validate a new follow edge `user_id -> following_id`.
///
/// A user may not follow themselves and may not follow the same user twice.
/// Both are reported against the `following` input field.
pub fn validate_new_follow(
    user_id: DbId,
    following_id: DbId,
    already_following: bool,
) -> Result<(), CoreError> {
    if user_id == following_id {
        return Err(CoreError::invalid_field(
            "following",
            "You cannot follow yourself.",
        ));
    }
    if already_following {
        return Err(already_following_error());
    }
    Ok(())
}

/// The error for an edge that already exists.
pub fn already_following_error() -> CoreError {
    CoreError::invalid_field("following", "You are already following this user.")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn self_follow_is_rejected() {
        assert_matches!(
            validate_new_follow(1, 1, false),
            Err(CoreError::InvalidField { field: "following", .. })
        );
    }

    #[test]
    fn duplicate_follow_is_rejected() {
        assert_matches!(
            validate_new_follow(1, 2, true),
            Err(CoreError::InvalidField { field: "following", .. })
        );
    }

    #[test]
    fn fresh_edge_is_accepted() {
        assert!(validate_new_follow(1, 2, false).is_ok());
    }
}
