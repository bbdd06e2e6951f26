//! Route definitions for route-segment resolution.

use axum::routing::get;
use axum::Router;

use crate::handlers::entities;
use crate::state::AppState;

/// Resolution routes mounted at `/entities`.
///
/// ```text
/// GET /{route}   -> resolve (plural segment -> entity descriptor)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{route}", get(entities::resolve))
}
