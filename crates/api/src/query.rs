//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query params for list endpoints that double as lookup providers
/// (`?q=&limit=&offset=`).
///
/// `q` is a display-label prefix (email for users, name for
/// companies). Limit and offset are clamped in the handlers.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl SearchParams {
    /// Limit clamped to `1..=100`, defaulting to 20.
    pub fn clamped_limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }

    /// Offset clamped to non-negative, defaulting to 0.
    pub fn clamped_offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}
