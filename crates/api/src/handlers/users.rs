//! Handlers for the `/users` resource.
//!
//! The list endpoint doubles as the lookup provider for
//! reference-selection widgets: `?q=` filters by email prefix.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fleetdesk_core::error::CoreError;
use fleetdesk_core::types::EntityId;
use fleetdesk_core::validation::user_schema;
use fleetdesk_db::models::user::{CreateUser, User};
use fleetdesk_db::repositories::UserRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_entity;
use crate::query::SearchParams;
use crate::state::AppState;

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<User>)> {
    let input: CreateUser = validate_entity(user_schema(), body)?;
    let user = UserRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users[?q=&limit=&offset=]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<User>>> {
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
    Ok(Json(users))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<EntityId>) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}
