//! Author-or-read-only authorization predicates.
//!
//! Authorization runs in two phases:
//!
//! 1. [`check_authenticated_or_read_only`] before the target object is
//!    loaded. Unsafe methods require an authenticated requester.
//! 2. [`check_author_or_read_only`] after the object is loaded. Unsafe
//!    methods additionally require the requester to be the object's author.
//!
//! Both functions are pure and take the HTTP method as a plain string so this
//! crate stays free of any web framework dependency.

use crate::error::CoreError;
use crate::types::DbId;

/// Methods that never modify state.
pub const SAFE_METHODS: &[&str] = &["GET", "HEAD", "OPTIONS"];

/// An entity owned by a single user.
pub trait Authored {
    /// The id of the owning user.
    fn author_id(&self) -> DbId;
}

/// Check whether `method` is a read-only method. Comparison is exact, HTTP
/// method names are case-sensitive.
pub fn is_safe_method(method: &str) -> bool {
    SAFE_METHODS.contains(&method)
}

/// Coarse check: safe methods are open to everyone, anything else needs an
/// authenticated requester.
pub fn check_authenticated_or_read_only(
    method: &str,
    requester: Option<DbId>,
) -> Result<(), CoreError> {
    if is_safe_method(method) || requester.is_some() {
        return Ok(());
    }
    Err(CoreError::Unauthorized(
        "Authentication credentials were not provided".into(),
    ))
}

/// Fine check: safe methods are open to everyone, anything else is reserved
/// for the object's author.
///
/// An anonymous requester on an unsafe method is reported as
/// [`CoreError::Unauthorized`] rather than `Forbidden`, matching the coarse
/// check.
pub fn check_author_or_read_only<T: Authored + ?Sized>(
    method: &str,
    requester: Option<DbId>,
    object: &T,
) -> Result<(), CoreError> {
    if is_safe_method(method) {
        return Ok(());
    }
    match requester {
        Some(id) if id == object.author_id() => Ok(()),
        Some(_) => Err(CoreError::Forbidden(
            "Only the author may modify this resource".into(),
        )),
        None => Err(CoreError::Unauthorized(
            "Authentication credentials were not provided".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    struct Owned(DbId);

    impl Authored for Owned {
        fn author_id(&self) -> DbId {
            self.0
        }
    }

    #[test]
    fn safe_methods_are_recognised() {
        assert!(is_safe_method("GET"));
        assert!(is_safe_method("HEAD"));
        assert!(is_safe_method("OPTIONS"));
        assert!(!is_safe_method("POST"));
        assert!(!is_safe_method("PATCH"));
        assert!(!is_safe_method("get"));
    }

    #[test]
    fn anonymous_reads_pass_coarse_check() {
        assert!(check_authenticated_or_read_only("GET", None).is_ok());
    }

    #[test]
    fn anonymous_writes_fail_coarse_check() {
        for method in ["POST", "PUT", "PATCH", "DELETE"] {
            assert_matches!(
                check_authenticated_or_read_only(method, None),
                Err(CoreError::Unauthorized(_))
            );
        }
    }

    #[test]
    fn authenticated_writes_pass_coarse_check() {
        assert!(check_authenticated_or_read_only("POST", Some(7)).is_ok());
    }

    #[test]
    fn author_may_modify() {
        let obj = Owned(3);
        for method in ["PUT", "PATCH", "DELETE"] {
            assert!(check_author_or_read_only(method, Some(3), &obj).is_ok());
        }
    }

    #[test]
    fn non_author_is_forbidden() {
        let obj = Owned(3);
        for method in ["PUT", "PATCH", "DELETE"] {
            assert_matches!(
                check_author_or_read_only(method, Some(4), &obj),
                Err(CoreError::Forbidden(_))
            );
        }
    }

    #[test]
    fn anyone_may_read_object() {
        let obj = Owned(3);
        assert!(check_author_or_read_only("GET", None, &obj).is_ok());
        assert!(check_author_or_read_only("GET", Some(99), &obj).is_ok());
    }

    #[test]
    fn anonymous_write_on_object_is_unauthorized() {
        let obj = Owned(3);
        assert_matches!(
            check_author_or_read_only("DELETE", None, &obj),
            Err(CoreError::Unauthorized(_))
        );
    }
}
