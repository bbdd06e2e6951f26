//! Route-to-entity resolution and route-keyed resource dispatch.
//!
//! `/entities/{route}` answers "which entity does this URL segment
//! refer to" without touching storage. `/resources/{route}` serves the
//! corresponding collection, so generated pages can fetch by route
//! name alone.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use fleetdesk_core::routes::{is_known_route, route_to_entity};
use fleetdesk_db::repositories::{CompanyRepo, DashboardRepo, UserRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Resolution result for a route segment.
///
/// Unknown routes are still resolved (the mapping falls back to the
/// segment itself) but flagged `known: false` so callers can decide
/// whether to trust the name.
#[derive(Debug, Serialize)]
pub struct EntityDescriptor {
    pub route: String,
    pub entity: String,
    pub known: bool,
}

/// GET /api/v1/entities/{route}
pub async fn resolve(Path(route): Path<String>) -> Json<DataResponse<EntityDescriptor>> {
    let descriptor = EntityDescriptor {
        entity: route_to_entity(&route).to_string(),
        known: is_known_route(&route),
        route,
    };
    Json(DataResponse::new(descriptor))
}

/// GET /api/v1/resources/{route}[?q=&limit=&offset=]
///
/// Dispatches to the collection named by the route mapping. Routes
/// that resolve only by fallback have no collection and 404.
pub async fn dispatch_list(
    State(state): State<AppState>,
    Path(route): Path<String>,
    Query(params): Query<SearchParams>,
) -> AppResult<Response> {
    if !is_known_route(&route) {
        return Err(AppError::NotFound(format!("Unknown resource: {route}")));
    }
    let response = match route_to_entity(&route) {
        "dashboard" => Json(DashboardRepo::list(&state.pool).await?).into_response(),
        "user" => {
            let users = match params.q.as_deref() {
                Some(prefix) => {
                    UserRepo::search_by_email(
                        &state.pool,
                        prefix,
                        params.clamped_limit(),
                        params.clamped_offset(),
                    )
                    .await?
                }
                None => UserRepo::list(&state.pool).await?,
            };
            Json(users).into_response()
        }
        "company" => {
            let companies = match params.q.as_deref() {
                Some(prefix) => {
                    CompanyRepo::search_by_name(
                        &state.pool,
                        prefix,
                        params.clamped_limit(),
                        params.clamped_offset(),
                    )
                    .await?
                }
                None => CompanyRepo::list(&state.pool).await?,
            };
            Json(companies).into_response()
        }
        entity => {
            // Mapped entities without a backing table (cars, bookings).
            return Err(AppError::NotFound(format!(
                "No collection for entity: {entity}"
            )));
        }
    };
    Ok(response)
}
