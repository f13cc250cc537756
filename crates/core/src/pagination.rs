//! Limit/offset pagination.
//!
//! A list endpoint is paginated only when the client sends `limit`. The
//! window is clamped, and `next` / `previous` links are rebuilt from the
//! request path and query string so any other parameters survive.

use serde::Serialize;

/// Maximum page size a client may request.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Query parameter carrying the page size.
pub const LIMIT_PARAM: &str = "limit";

/// Query parameter carrying the page start.
pub const OFFSET_PARAM: &str = "offset";

/// Clamp a user-provided limit to `[1, max]`.
pub fn clamp_limit(limit: i64, max: i64) -> i64 {
    limit.max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// A validated `limit`/`offset` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

impl PageWindow {
    /// Build a window from raw query values.
    ///
    /// Returns `None` when `limit` is absent, meaning the caller should return
    /// the whole collection unpaginated.
    pub fn from_params(limit: Option<i64>, offset: Option<i64>) -> Option<Self> {
        limit.map(|limit| PageWindow {
            limit: clamp_limit(limit, MAX_PAGE_LIMIT),
            offset: clamp_offset(offset),
        })
    }

    /// Link to the following page, or `None` if this is the last one.
    pub fn next_link(&self, path: &str, query: Option<&str>, count: i64) -> Option<String> {
        let next = self.offset.saturating_add(self.limit);
        if next >= count {
            return None;
        }
        Some(build_link(path, query, self.limit, Some(next)))
    }

    /// Link to the preceding page, or `None` if this window starts at zero.
    ///
    /// The `offset` parameter is dropped when the preceding page starts at
    /// the beginning of the collection.
    pub fn previous_link(&self, path: &str, query: Option<&str>) -> Option<String> {
        if self.offset <= 0 {
            return None;
        }
        let previous = self.offset - self.limit;
        Some(build_link(
            path,
            query,
            self.limit,
            (previous > 0).then_some(previous),
        ))
    }
}

/// One page of a collection.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T: Serialize> Page<T> {
    pub fn new(
        window: PageWindow,
        path: &str,
        query: Option<&str>,
        count: i64,
        results: Vec<T>,
    ) -> Self {
        Page {
            count,
            next: window.next_link(path, query, count),
            previous: window.previous_link(path, query),
            results,
        }
    }
}

/// Rewrite the pagination parameters of a request URL.
///
/// Existing pairs are kept verbatim (already percent-encoded) except for
/// `limit` and `offset`, which are appended with their new values.
fn build_link(path: &str, query: Option<&str>, limit: i64, offset: Option<i64>) -> String {
    let mut pairs: Vec<String> = query
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split('=').next().unwrap_or_default();
            key != LIMIT_PARAM && key != OFFSET_PARAM
        })
        .map(str::to_owned)
        .collect();

    pairs.push(format!("{LIMIT_PARAM}={limit}"));
    if let Some(offset) = offset {
        pairs.push(format!("{OFFSET_PARAM}={offset}"));
    }

    format!("{path}?{}", pairs.join("&"))
}
