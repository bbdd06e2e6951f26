//! Schema evaluator — pure logic, no I/O.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use super::rules::{FieldErrors, FieldKind, FieldRule};

/// Validate a raw record against a schema.
///
/// Every rule is evaluated independently so the caller gets one error
/// per failing field, not just the first. On success the returned
/// record carries coerced values (normalized booleans, integers, and
/// timestamps); fields the schema does not mention pass through
/// untouched, and absent optional fields stay absent.
pub fn validate_record(
    rules: &[FieldRule],
    data: &Map<String, Value>,
) -> Result<Map<String, Value>, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut coerced = data.clone();

    for rule in rules {
        match check_field(rule, data.get(rule.name)) {
            Ok(Some(value)) => {
                coerced.insert(rule.name.to_string(), value);
            }
            Ok(None) => {}
            Err(message) => errors.insert(rule.name, message),
        }
    }

    if errors.is_empty() {
        Ok(coerced)
    } else {
        Err(errors)
    }
}

/// Check one field. `Ok(Some(v))` replaces the raw value with its
/// coerced form; `Ok(None)` leaves the record as-is (absent optional).
fn check_field(rule: &FieldRule, value: Option<&Value>) -> Result<Option<Value>, String> {
    match value {
        None => {
            if rule.required {
                Err(format!("{} is required", rule.name))
            } else {
                Ok(None)
            }
        }
        // Required wins over nullable: a null required field is an error
        // even when the declared type permits null.
        Some(Value::Null) => {
            if rule.required {
                Err(format!("{} is required", rule.name))
            } else if rule.nullable {
                Ok(Some(Value::Null))
            } else {
                Err(format!("{} may not be null", rule.name))
            }
        }
        Some(value) => coerce(rule, value).map(Some),
    }
}

/// Coerce a present, non-null value to the rule's canonical form.
fn coerce(rule: &FieldRule, value: &Value) -> Result<Value, String> {
    match rule.kind {
        FieldKind::Boolean => coerce_boolean(value)
            .ok_or_else(|| format!("{} must be a boolean", rule.name)),
        FieldKind::Integer => coerce_integer(value)
            .ok_or_else(|| format!("{} must be an integer", rule.name)),
        FieldKind::Date => coerce_date(value)
            .ok_or_else(|| format!("{} must be a valid date", rule.name)),
        FieldKind::Reference => coerce_reference(value)
            .ok_or_else(|| format!("{} must be a valid identifier", rule.name)),
        FieldKind::Text => coerce_text(rule, value),
    }
}

/// Booleans, plus the 0/1 integers toggle widgets post.
fn coerce_boolean(value: &Value) -> Option<Value> {
    match value {
        Value::Bool(b) => Some(Value::Bool(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(Value::Bool(false)),
            Some(1) => Some(Value::Bool(true)),
            _ => None,
        },
        _ => None,
    }
}

/// JSON integers, or floats with no fractional part (`3.0` counts).
/// Floats outside i64 range are rejected rather than saturated.
fn coerce_integer(value: &Value) -> Option<Value> {
    // 2^63 as f64; the smallest magnitude that no longer fits in i64.
    const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let n = value.as_number()?;
    if let Some(i) = n.as_i64() {
        return Some(Value::from(i));
    }
    let f = n.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f >= -I64_LIMIT && f < I64_LIMIT {
        Some(Value::from(f as i64))
    } else {
        None
    }
}

/// RFC 3339 timestamps, or plain dates taken as midnight UTC. Output is
/// normalized back to RFC 3339.
fn coerce_date(value: &Value) -> Option<Value> {
    let s = value.as_str()?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Value::String(dt.with_timezone(&Utc).to_rfc3339()));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
    Some(Value::String(midnight.to_rfc3339()))
}

/// Any non-blank string. Identifier format and referential integrity
/// are the storage layer's job; this boundary only guarantees a value
/// is present.
fn coerce_reference(value: &Value) -> Option<Value> {
    let s = value.as_str()?;
    if s.trim().is_empty() {
        return None;
    }
    Some(Value::String(s.to_string()))
}

fn coerce_text(rule: &FieldRule, value: &Value) -> Result<Value, String> {
    let s = value
        .as_str()
        .ok_or_else(|| format!("{} must be a string", rule.name))?;
    if rule.required && s.trim().is_empty() {
        return Err(format!("{} is required", rule.name));
    }
    Ok(Value::String(s.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::validation::dashboard_schema;

    fn record(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    /// Minimal valid dashboard payload.
    fn valid_dashboard() -> Map<String, Value> {
        record(&[
            ("active_status", json!(true)),
            ("user_id", json!("7b4b2b1e-1111-4222-8333-444455556666")),
            ("company_id", json!("7b4b2b1e-aaaa-4bbb-8ccc-ddddeeeeffff")),
        ])
    }

    #[test]
    fn minimal_record_passes_and_optionals_stay_absent() {
        let coerced = validate_record(dashboard_schema(), &valid_dashboard()).unwrap();
        assert_eq!(coerced["active_status"], json!(true));
        assert!(!coerced.contains_key("assigned_cars"));
        assert!(!coerced.contains_key("total_bookings"));
        assert!(!coerced.contains_key("last_login"));
    }

    #[test]
    fn missing_active_status_fails_on_that_field() {
        let mut data = valid_dashboard();
        data.remove("active_status");
        let errors = validate_record(dashboard_schema(), &data).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("active_status"), Some("active_status is required"));
    }

    #[test]
    fn null_user_id_fails_despite_nullable_declared_type() {
        let mut data = valid_dashboard();
        data.insert("user_id".into(), Value::Null);
        let errors = validate_record(dashboard_schema(), &data).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("user_id"));
    }

    #[test]
    fn null_references_fail_regardless_of_other_field_validity() {
        let data = record(&[
            ("active_status", json!("not-a-bool")),
            ("user_id", Value::Null),
            ("company_id", Value::Null),
        ]);
        let errors = validate_record(dashboard_schema(), &data).unwrap_err();
        assert!(errors.contains("user_id"));
        assert!(errors.contains("company_id"));
        // Batch evaluation: the bad boolean is reported in the same pass.
        assert!(errors.contains("active_status"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn non_integer_counters_fail_absent_counters_pass() {
        let mut data = valid_dashboard();
        data.insert("assigned_cars".into(), json!("three"));
        data.insert("total_bookings".into(), json!(2.5));
        let errors = validate_record(dashboard_schema(), &data).unwrap_err();
        assert!(errors.contains("assigned_cars"));
        assert!(errors.contains("total_bookings"));

        let data = valid_dashboard();
        assert!(validate_record(dashboard_schema(), &data).is_ok());
    }

    #[test]
    fn null_counters_are_allowed() {
        let mut data = valid_dashboard();
        data.insert("assigned_cars".into(), Value::Null);
        data.insert("last_login".into(), Value::Null);
        let coerced = validate_record(dashboard_schema(), &data).unwrap();
        assert_eq!(coerced["assigned_cars"], Value::Null);
        assert_eq!(coerced["last_login"], Value::Null);
    }

    #[test]
    fn integral_float_counter_is_coerced_to_integer() {
        let mut data = valid_dashboard();
        data.insert("assigned_cars".into(), json!(3.0));
        let coerced = validate_record(dashboard_schema(), &data).unwrap();
        assert_eq!(coerced["assigned_cars"], json!(3));
    }

    #[test]
    fn integral_float_beyond_i64_range_fails_instead_of_saturating() {
        let mut data = valid_dashboard();
        data.insert("assigned_cars".into(), json!(1e300));
        let errors = validate_record(dashboard_schema(), &data).unwrap_err();
        assert_eq!(
            errors.get("assigned_cars"),
            Some("assigned_cars must be an integer")
        );

        data.insert("assigned_cars".into(), json!(-1e300));
        let errors = validate_record(dashboard_schema(), &data).unwrap_err();
        assert!(errors.contains("assigned_cars"));
    }

    #[test]
    fn zero_one_booleans_are_coerced() {
        let mut data = valid_dashboard();
        data.insert("active_status".into(), json!(1));
        let coerced = validate_record(dashboard_schema(), &data).unwrap();
        assert_eq!(coerced["active_status"], json!(true));

        data.insert("active_status".into(), json!(0));
        let coerced = validate_record(dashboard_schema(), &data).unwrap();
        assert_eq!(coerced["active_status"], json!(false));

        data.insert("active_status".into(), json!(2));
        let errors = validate_record(dashboard_schema(), &data).unwrap_err();
        assert!(errors.contains("active_status"));
    }

    #[test]
    fn dates_are_normalized_to_rfc3339() {
        let mut data = valid_dashboard();
        data.insert("last_login".into(), json!("2024-05-01"));
        let coerced = validate_record(dashboard_schema(), &data).unwrap();
        assert_eq!(coerced["last_login"], json!("2024-05-01T00:00:00+00:00"));

        data.insert("last_login".into(), json!("2024-05-01T10:30:00+02:00"));
        let coerced = validate_record(dashboard_schema(), &data).unwrap();
        assert_eq!(coerced["last_login"], json!("2024-05-01T08:30:00+00:00"));

        data.insert("last_login".into(), json!("yesterday"));
        let errors = validate_record(dashboard_schema(), &data).unwrap_err();
        assert_eq!(errors.get("last_login"), Some("last_login must be a valid date"));
    }

    #[test]
    fn opaque_string_references_are_accepted() {
        // The boundary check on references is presence only; identifier
        // format is enforced by the storage layer.
        let data = record(&[
            ("active_status", json!(true)),
            ("user_id", json!("u1")),
            ("company_id", json!("c1")),
        ]);
        let coerced = validate_record(dashboard_schema(), &data).unwrap();
        assert_eq!(coerced["user_id"], json!("u1"));
        assert_eq!(coerced["company_id"], json!("c1"));
    }

    #[test]
    fn non_string_or_blank_reference_fails() {
        let mut data = valid_dashboard();
        data.insert("user_id".into(), json!(42));
        let errors = validate_record(dashboard_schema(), &data).unwrap_err();
        assert_eq!(errors.get("user_id"), Some("user_id must be a valid identifier"));

        let mut data = valid_dashboard();
        data.insert("company_id".into(), json!("   "));
        let errors = validate_record(dashboard_schema(), &data).unwrap_err();
        assert!(errors.contains("company_id"));
    }

    #[test]
    fn unknown_fields_pass_through_untouched() {
        let mut data = valid_dashboard();
        data.insert("note".into(), json!("keep me"));
        let coerced = validate_record(dashboard_schema(), &data).unwrap();
        assert_eq!(coerced["note"], json!("keep me"));
    }
}
