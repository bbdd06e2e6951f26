//! Company entity model and DTOs.

use fleetdesk_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `companies` table. `name` is the display label for
/// reference-selection widgets.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a company.
#[derive(Debug, Deserialize)]
pub struct CreateCompany {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
