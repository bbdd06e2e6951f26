//! Static validation schemas, one per modeled entity.

use super::rules::{FieldKind, FieldRule};

/// Dashboard create/edit schema.
///
/// `user_id` and `company_id` are declared nullable but required: the
/// required constraint takes precedence, so null fails. Referential
/// integrity beyond non-null is the storage backend's job.
static DASHBOARD_RULES: &[FieldRule] = &[
    FieldRule::optional("last_login", FieldKind::Date),
    FieldRule::required("active_status", FieldKind::Boolean),
    FieldRule::optional("assigned_cars", FieldKind::Integer),
    FieldRule::optional("total_bookings", FieldKind::Integer),
    FieldRule::required("user_id", FieldKind::Reference).nullable(),
    FieldRule::required("company_id", FieldKind::Reference).nullable(),
];

pub fn dashboard_schema() -> &'static [FieldRule] {
    DASHBOARD_RULES
}

static USER_RULES: &[FieldRule] = &[
    FieldRule::required("email", FieldKind::Text),
    FieldRule::optional("first_name", FieldKind::Text),
    FieldRule::optional("last_name", FieldKind::Text),
];

pub fn user_schema() -> &'static [FieldRule] {
    USER_RULES
}

static COMPANY_RULES: &[FieldRule] = &[
    FieldRule::required("name", FieldKind::Text),
    FieldRule::optional("description", FieldKind::Text),
];

pub fn company_schema() -> &'static [FieldRule] {
    COMPANY_RULES
}
