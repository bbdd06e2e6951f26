//! Route definitions for route-keyed collection dispatch.

use axum::routing::get;
use axum::Router;

use crate::handlers::entities;
use crate::state::AppState;

/// Dispatch routes mounted at `/resources`.
///
/// ```text
/// GET /{route}   -> dispatch_list (collection named by the route)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{route}", get(entities::dispatch_list))
}
