//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the (joined) database row; its
//!   `Serialize` impl is the wire representation
//! - `Deserialize` + `Validate` DTOs for inserts and updates

use serde::{Deserialize, Deserializer};

pub mod comment;
pub mod follow;
pub mod group;
pub mod post;
pub mod session;
pub mod user;

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// absent -> `None`, `null` -> `Some(None)`, value -> `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
