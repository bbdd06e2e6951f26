//! Repository for the `dashboards` table.

use fleetdesk_core::types::EntityId;
use sqlx::PgPool;

use crate::models::dashboard::{CreateDashboard, Dashboard, UpdateDashboard};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, company_id, active_status, last_login, \
                       assigned_cars, total_bookings, created_at, updated_at";

/// Provides CRUD operations for dashboards.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Insert a new dashboard, returning the stored row.
    ///
    /// Foreign-key violations on `user_id`/`company_id` surface as
    /// database errors; referential integrity is enforced here, not in
    /// the client.
    pub async fn create(pool: &PgPool, input: &CreateDashboard) -> Result<Dashboard, sqlx::Error> {
        let query = format!(
            "INSERT INTO dashboards \
                (user_id, company_id, active_status, last_login, assigned_cars, total_bookings) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dashboard>(&query)
            .bind(input.user_id)
            .bind(input.company_id)
            .bind(input.active_status)
            .bind(input.last_login)
            .bind(input.assigned_cars)
            .bind(input.total_bookings)
            .fetch_one(pool)
            .await
    }

    /// Find a dashboard by ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Dashboard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dashboards WHERE id = $1");
        sqlx::query_as::<_, Dashboard>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all dashboards, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Dashboard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dashboards ORDER BY created_at DESC");
        sqlx::query_as::<_, Dashboard>(&query).fetch_all(pool).await
    }

    /// Update a dashboard. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateDashboard,
    ) -> Result<Option<Dashboard>, sqlx::Error> {
        let query = format!(
            "UPDATE dashboards SET \
                user_id = COALESCE($2, user_id), \
                company_id = COALESCE($3, company_id), \
                active_status = COALESCE($4, active_status), \
                last_login = COALESCE($5, last_login), \
                assigned_cars = COALESCE($6, assigned_cars), \
                total_bookings = COALESCE($7, total_bookings) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dashboard>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(input.company_id)
            .bind(input.active_status)
            .bind(input.last_login)
            .bind(input.assigned_cars)
            .bind(input.total_bookings)
            .fetch_optional(pool)
            .await
    }

    /// Delete a dashboard. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dashboards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
