pub mod companies;
pub mod dashboards;
pub mod entities;
pub mod health;
pub mod resources;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dashboards                 list, create
/// /dashboards/{id}            get, update, delete
///
/// /users                      list/search, create
/// /users/{id}                 get, delete
///
/// /companies                  list/search, create
/// /companies/{id}             get, delete
///
/// /entities/{route}           resolve route segment to entity name
/// /resources/{route}          collection dispatch keyed by route
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dashboards", dashboards::router())
        .nest("/users", users::router())
        .nest("/companies", companies::router())
        .nest("/entities", entities::router())
        .nest("/resources", resources::router())
}
