//! Request extractors for authentication, authorization and input validation.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`permissions::Requester`] -- Authenticated-or-read-only gate plus the
//!   author-or-read-only object check.
//! - [`validated_json::ValidatedJson`] -- JSON body that passed `validator` rules.
//! - [`validated_json::DeferredJson`] -- JSON body validated after the object checks.

pub mod auth;
pub mod permissions;
pub mod validated_json;
