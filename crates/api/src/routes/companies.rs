//! Route definitions for the companies resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::companies;
use crate::state::AppState;

/// Company routes mounted at `/companies`.
///
/// ```text
/// GET    /       -> list (supports ?q= name prefix search)
/// POST   /       -> create (schema-validated)
/// GET    /{id}   -> get_by_id
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(companies::list).post(companies::create))
        .route("/{id}", get(companies::get_by_id).delete(companies::delete))
}
