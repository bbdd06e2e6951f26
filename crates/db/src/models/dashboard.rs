//! Dashboard entity model and DTOs.

use fleetdesk_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `dashboards` table.
///
/// `user_id` and `company_id` are enforced foreign keys; `last_login`
/// and both counters are genuinely nullable in storage.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dashboard {
    pub id: EntityId,
    pub user_id: EntityId,
    pub company_id: EntityId,
    pub active_status: bool,
    pub last_login: Option<Timestamp>,
    pub assigned_cars: Option<i32>,
    pub total_bookings: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a dashboard.
///
/// Built from a record that already passed schema validation, so
/// timestamps arrive as normalized RFC 3339 strings and references as
/// canonical UUIDs.
#[derive(Debug, Deserialize)]
pub struct CreateDashboard {
    pub user_id: EntityId,
    pub company_id: EntityId,
    pub active_status: bool,
    #[serde(default)]
    pub last_login: Option<Timestamp>,
    #[serde(default)]
    pub assigned_cars: Option<i32>,
    #[serde(default)]
    pub total_bookings: Option<i32>,
}

/// DTO for updating a dashboard. All fields are optional; absent fields
/// keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateDashboard {
    pub user_id: Option<EntityId>,
    pub company_id: Option<EntityId>,
    pub active_status: Option<bool>,
    pub last_login: Option<Timestamp>,
    pub assigned_cars: Option<i32>,
    pub total_bookings: Option<i32>,
}
