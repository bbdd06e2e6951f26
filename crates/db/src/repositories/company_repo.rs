//! Repository for the `companies` table.

use fleetdesk_core::types::EntityId;
use sqlx::PgPool;

use crate::models::company::{Company, CreateCompany};

const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides CRUD and lookup operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Insert a new company, returning the stored row.
    pub async fn create(pool: &PgPool, input: &CreateCompany) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (name, description) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a company by ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all companies ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies ORDER BY name");
        sqlx::query_as::<_, Company>(&query).fetch_all(pool).await
    }

    /// Case-insensitive name prefix search, paged. Backs the
    /// reference-selection lookup for dashboard forms.
    pub async fn search_by_name(
        pool: &PgPool,
        prefix: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM companies \
             WHERE name ILIKE $1 \
             ORDER BY name \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(format!("{prefix}%"))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete a company. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
