//! Handlers for the `/dashboards` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fleetdesk_core::error::CoreError;
use fleetdesk_core::types::EntityId;
use fleetdesk_core::validation::dashboard_schema;
use fleetdesk_db::models::dashboard::{CreateDashboard, Dashboard, UpdateDashboard};
use fleetdesk_db::repositories::DashboardRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_entity;
use crate::state::AppState;

/// POST /api/v1/dashboards
///
/// Runs the dashboard schema over the raw record before touching
/// storage; referential integrity of `user_id`/`company_id` is left to
/// the database's foreign keys.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Dashboard>)> {
    let input: CreateDashboard = validate_entity(dashboard_schema(), body)?;
    let dashboard = DashboardRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(dashboard)))
}

/// GET /api/v1/dashboards
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Dashboard>>> {
    let dashboards = DashboardRepo::list(&state.pool).await?;
    Ok(Json(dashboards))
}

/// GET /api/v1/dashboards/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Dashboard>> {
    let dashboard = DashboardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dashboard",
            id,
        }))?;
    Ok(Json(dashboard))
}

/// PUT /api/v1/dashboards/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateDashboard>,
) -> AppResult<Json<Dashboard>> {
    let dashboard = DashboardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dashboard",
            id,
        }))?;
    Ok(Json(dashboard))
}

/// DELETE /api/v1/dashboards/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<EntityId>) -> AppResult<StatusCode> {
    let deleted = DashboardRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Dashboard",
            id,
        }))
    }
}
