//! Route definitions for the dashboards resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboards;
use crate::state::AppState;

/// Dashboard CRUD routes mounted at `/dashboards`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (schema-validated)
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboards::list).post(dashboards::create))
        .route(
            "/{id}",
            get(dashboards::get_by_id)
                .put(dashboards::update)
                .delete(dashboards::delete),
        )
}
