//! Handlers for the `/companies` resource.
//!
//! The list endpoint doubles as the lookup provider for
//! reference-selection widgets: `?q=` filters by name prefix.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fleetdesk_core::error::CoreError;
use fleetdesk_core::types::EntityId;
use fleetdesk_core::validation::company_schema;
use fleetdesk_db::models::company::{Company, CreateCompany};
use fleetdesk_db::repositories::CompanyRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_entity;
use crate::query::SearchParams;
use crate::state::AppState;

/// POST /api/v1/companies
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Company>)> {
    let input: CreateCompany = validate_entity(company_schema(), body)?;
    let company = CompanyRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /api/v1/companies[?q=&limit=&offset=]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Company>>> {
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
    Ok(Json(companies))
}

/// GET /api/v1/companies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id,
        }))?;
    Ok(Json(company))
}

/// DELETE /api/v1/companies/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<EntityId>) -> AppResult<StatusCode> {
    let deleted = CompanyRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id,
        }))
    }
}
