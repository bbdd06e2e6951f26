//! Declarative record validation.
//!
//! Each entity declares a static slice of [`FieldRule`]s; the evaluator
//! applies every rule independently (batch validation, no
//! short-circuit) and either returns a coerced record ready for
//! submission or a per-field error map.

mod evaluator;
mod rules;
mod schemas;

pub use evaluator::validate_record;
pub use rules::{FieldErrors, FieldKind, FieldRule};
pub use schemas::{company_schema, dashboard_schema, user_schema};
