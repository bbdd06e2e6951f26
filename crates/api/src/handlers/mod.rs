//! HTTP handlers, one module per resource.

pub mod companies;
pub mod dashboards;
pub mod entities;
pub mod users;

use fleetdesk_core::error::CoreError;
use fleetdesk_core::validation::{validate_record, FieldRule};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// Validate a raw JSON body against an entity schema and deserialize
/// the coerced record into its create DTO.
///
/// Schema failures become per-field `VALIDATION_ERROR` responses.
/// Fields the schema does not mention pass through the validator and
/// are dropped by the typed DTO.
pub(crate) fn validate_entity<T: DeserializeOwned>(
    schema: &[FieldRule],
    body: Value,
) -> Result<T, AppError> {
    let record = match body {
        Value::Object(map) => map,
        _ => return Err(AppError::BadRequest("Expected a JSON object".into())),
    };
    let coerced = validate_record(schema, &record).map_err(CoreError::Validation)?;
    serde_json::from_value(Value::Object(coerced))
        .map_err(|e| AppError::BadRequest(format!("Invalid record shape: {e}")))
}
